use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::{core::state::Control, presentation::style::ControlPresentation};

pub struct FeedbackButton {
    control: Control,
    presentation: ControlPresentation,
    style: Style,
}

impl FeedbackButton {
    pub fn new(control: Control, presentation: ControlPresentation, style: Style) -> Self {
        Self {
            control,
            presentation,
            style,
        }
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.presentation.icon.symbol(), self.control)
    }
}

impl Widget for FeedbackButton {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = if self.presentation.is_emphasized() {
            self.style.add_modifier(Modifier::BOLD)
        } else {
            self.style
        };
        let block = Block::bordered().border_style(style);
        Paragraph::new(Span::styled(self.label(), style))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
