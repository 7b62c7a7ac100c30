use ratatui::{prelude::*, widgets::Paragraph};
use strum::IntoEnumIterator;

use crate::{
    core::state::Control,
    presentation::{
        config::Styles,
        style::ControlPresentation,
        widgets::feedback_button::FeedbackButton,
    },
};

const BUTTON_WIDTH: u16 = 13;
const BUTTON_HEIGHT: u16 = 3;

/// Screen areas of the feedback view, used for rendering and hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedbackLayout {
    pub prompt: Rect,
    pub like: Rect,
    pub dislike: Rect,
    pub status: Rect,
}

impl FeedbackLayout {
    pub fn new(area: Rect) -> Self {
        let [prompt, buttons, status, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);
        let [like, _, dislike, _] = Layout::horizontal([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(1),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
        ])
        .areas(buttons);
        Self {
            prompt,
            like,
            dislike,
            status,
        }
    }

    pub fn area(&self, control: Control) -> Rect {
        match control {
            Control::Like => self.like,
            Control::Dislike => self.dislike,
        }
    }

    /// Control under the given cell, if any
    pub fn hit(&self, column: u16, row: u16) -> Option<Control> {
        let position = Position::new(column, row);
        Control::iter().find(|control| self.area(*control).contains(position))
    }
}

pub struct FeedbackBar<'a> {
    like: ControlPresentation,
    dislike: ControlPresentation,
    status: Option<String>,
    styles: &'a Styles,
}

impl<'a> FeedbackBar<'a> {
    pub fn new(
        like: ControlPresentation,
        dislike: ControlPresentation,
        status: Option<String>,
        styles: &'a Styles,
    ) -> Self {
        Self {
            like,
            dislike,
            status,
            styles,
        }
    }

    fn button(&self, control: Control) -> FeedbackButton {
        let presentation = match control {
            Control::Like => self.like,
            Control::Dislike => self.dislike,
        };
        let style = self.styles.emphasis(presentation.emphasis);
        FeedbackButton::new(control, presentation, style)
    }
}

impl<'a> Widget for FeedbackBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = FeedbackLayout::new(area);

        Paragraph::new("Was this helpful?").render(layout.prompt, buf);
        self.button(Control::Like).render(layout.like, buf);
        self.button(Control::Dislike).render(layout.dislike, buf);

        let status = self.status.unwrap_or_default();
        Paragraph::new(Span::styled(status, self.styles.status())).render(layout.status, buf);
    }
}
