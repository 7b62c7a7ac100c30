//! Terminal application hosting a single feedback widget

use std::{sync::Arc, time::Duration};

use color_eyre::eyre::Result;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        msg::Msg,
        state::{Control, FeedbackState},
    },
    infrastructure::{
        config::Config,
        notifier::Notifier,
        notifier_service::NotifierService,
        tui::{Frame, Tui},
    },
    presentation::{
        config::keybindings::Action,
        controller::TerminalSurface,
        widgets::{FeedbackBar, FeedbackLayout},
    },
    widget::FeedbackWidget,
};

pub struct App {
    config: Config,
    widget: FeedbackWidget<TerminalSurface>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    notifier_cancel: CancellationToken,
    layout: FeedbackLayout,
    pointer_over: Option<Control>,
    should_quit: bool,
}

impl App {
    /// Start the notifier service and build the widget; needs a tokio runtime
    pub fn new(config: Config, notifier: Arc<dyn Notifier>) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (handle, notifier_cancel, service) = NotifierService::new(notifier, msg_tx);
        service.run();

        Self {
            config,
            widget: FeedbackWidget::new(TerminalSurface::new(), handle),
            msg_rx,
            notifier_cancel,
            layout: FeedbackLayout::default(),
            pointer_over: None,
            should_quit: false,
        }
    }

    pub fn widget(&self) -> &FeedbackWidget<TerminalSurface> {
        &self.widget
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Translate a terminal event into widget messages
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match self.config.keybindings.action_for(key) {
                    Some(Action::Like) => self.dispatch(Msg::Clicked(Control::Like)),
                    Some(Action::Dislike) => self.dispatch(Msg::Clicked(Control::Dislike)),
                    Some(Action::Quit) => self.should_quit = true,
                    None => {}
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                log::debug!("Terminal resized to {width}x{height}");
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        let hit = self.layout.hit(mouse.column, mouse.row);
        if hit != self.pointer_over {
            if let Some(previous) = self.pointer_over {
                self.dispatch(Msg::PointerLeft(previous));
            }
            if let Some(current) = hit {
                self.dispatch(Msg::PointerEntered(current));
            }
            self.pointer_over = hit;
        }

        if let (MouseEventKind::Down(MouseButton::Left), Some(control)) = (mouse.kind, hit) {
            self.dispatch(Msg::Clicked(control));
        }
    }

    /// Feed a message to the widget, dropping the delivery handle
    pub fn dispatch(&mut self, msg: Msg) {
        let _ = self.widget.dispatch(msg);
    }

    fn status_line(&self) -> Option<String> {
        match self.widget.feedback() {
            FeedbackState::Unset => None,
            FeedbackState::Liked => Some("You liked this. Thanks for the feedback!".to_string()),
            FeedbackState::Disliked => {
                Some("You disliked this. Thanks for the feedback!".to_string())
            }
        }
    }

    pub fn view(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        self.layout = FeedbackLayout::new(area);

        let surface = self.widget.adapter();
        let like = surface
            .presentation(Control::Like)
            .copied()
            .unwrap_or_else(|| self.widget.presentation(Control::Like));
        let dislike = surface
            .presentation(Control::Dislike)
            .copied()
            .unwrap_or_else(|| self.widget.presentation(Control::Dislike));

        frame.render_widget(
            FeedbackBar::new(like, dislike, self.status_line(), &self.config.styles),
            area,
        );
    }

    pub async fn run(&mut self, tui: &mut Tui, frame_rate: f64) -> Result<()> {
        tui.enter()?;

        let mut render_interval =
            tokio::time::interval(Duration::from_secs_f64(1.0 / frame_rate.max(1.0)));
        let mut dirty = true;

        loop {
            tokio::select! {
                event = tui.next() => match event {
                    Some(Ok(event)) => {
                        self.handle_event(&event);
                        dirty = true;
                    }
                    Some(Err(e)) => {
                        log::error!("Terminal event error: {e}");
                        break;
                    }
                    None => break,
                },

                Some(msg) = self.msg_rx.recv() => {
                    self.dispatch(msg);
                    dirty = true;
                }

                _ = render_interval.tick() => {
                    if dirty {
                        tui.draw(|frame| self.view(frame))?;
                        dirty = false;
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        self.notifier_cancel.cancel();
        tui.exit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{presentation::style::Emphasis, test_helpers::RecordingNotifier};

    fn test_config() -> Config {
        json5::from_str(include_str!("../.config/config.json5")).expect("default config")
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn draw(app: &mut App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).expect("test terminal");
        terminal.draw(|frame| app.view(frame)).expect("draw");
        terminal
    }

    #[tokio::test]
    async fn test_keys_select_feedback() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut app = App::new(test_config(), notifier);

        app.handle_event(&key('l'));
        assert_eq!(app.widget().feedback(), FeedbackState::Liked);
        app.handle_event(&key('d'));
        assert_eq!(app.widget().feedback(), FeedbackState::Disliked);
        assert!(!app.should_quit());

        app.handle_event(&key('q'));
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_mouse_hover_and_click() {
        let mut app = App::new(test_config(), Arc::new(RecordingNotifier::new()));
        draw(&mut app);

        // Like button occupies columns 0..13 on rows 1..4
        app.handle_event(&mouse(MouseEventKind::Moved, 2, 2));
        assert_eq!(
            app.widget().presentation(Control::Like).emphasis,
            Emphasis::Success
        );

        app.handle_event(&mouse(MouseEventKind::Moved, 30, 5));
        assert_eq!(
            app.widget().presentation(Control::Like).emphasis,
            Emphasis::Primary
        );

        app.handle_event(&mouse(MouseEventKind::Moved, 15, 2));
        app.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 15, 2));
        assert_eq!(app.widget().feedback(), FeedbackState::Disliked);
        assert!(app.widget().state().control(Control::Dislike).is_committed());
    }

    #[tokio::test]
    async fn test_click_outside_controls_is_ignored() {
        let mut app = App::new(test_config(), Arc::new(RecordingNotifier::new()));
        draw(&mut app);
        app.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 35, 0));
        assert_eq!(app.widget().feedback(), FeedbackState::Unset);
    }

    #[tokio::test]
    async fn test_view_renders_status_line() {
        let mut app = App::new(test_config(), Arc::new(RecordingNotifier::new()));
        app.handle_event(&key('l'));
        let terminal = draw(&mut app);

        let buffer = terminal.backend().buffer();
        let status: String = (0..buffer.area.width)
            .map(|x| buffer[(x, 4)].symbol())
            .collect();
        assert!(status.starts_with("You liked this."), "status: {status:?}");
    }
}
