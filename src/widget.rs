//! Feedback widget instance
//!
//! `FeedbackWidget` owns its state, its presentation surface and its notifier
//! handle. Every interaction goes through [`FeedbackWidget::dispatch`], which
//! runs the pure update function, executes the resulting commands and
//! re-renders whatever changed.

use crate::{
    core::{
        cmd::Cmd,
        msg::Msg,
        state::{Control, FeedbackState, WidgetState},
        update::update,
    },
    infrastructure::notifier_service::{Delivery, NotifierHandle},
    presentation::{
        controller::{PresentationController, RenderAdapter},
        style::{present, ControlPresentation},
    },
};

pub struct FeedbackWidget<A> {
    state: WidgetState,
    controller: PresentationController<A>,
    notifier: NotifierHandle,
    error_count: usize,
    last_error: Option<String>,
}

impl<A: RenderAdapter> FeedbackWidget<A> {
    /// Create a widget in the `Unset` state and render both controls neutral
    pub fn new(adapter: A, notifier: NotifierHandle) -> Self {
        let state = WidgetState::new();
        let mut controller = PresentationController::new(adapter);
        controller.render(&state);
        Self {
            state,
            controller,
            notifier,
            error_count: 0,
            last_error: None,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn feedback(&self) -> FeedbackState {
        self.state.feedback
    }

    pub fn adapter(&self) -> &A {
        self.controller.adapter()
    }

    pub fn presentation(&self, control: Control) -> ControlPresentation {
        present(control, self.state.control(control))
    }

    /// Diagnostics logged for failed notifications so far
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Record the user's choice.
    ///
    /// Returns `None` when the choice is already committed. Otherwise the
    /// notification has been queued and the returned delivery may be awaited
    /// or simply dropped.
    pub fn select_feedback(&mut self, liked: bool) -> Option<Delivery> {
        self.dispatch(Msg::select(liked)).pop()
    }

    pub fn click(&mut self, control: Control) -> Option<Delivery> {
        self.dispatch(Msg::Clicked(control)).pop()
    }

    pub fn pointer_entered(&mut self, control: Control) {
        self.dispatch(Msg::PointerEntered(control));
    }

    pub fn pointer_left(&mut self, control: Control) {
        self.dispatch(Msg::PointerLeft(control));
    }

    /// Apply a message and run its side effects
    pub fn dispatch(&mut self, msg: Msg) -> Vec<Delivery> {
        log::debug!("dispatch: {}", msg.name());
        let state = std::mem::take(&mut self.state);
        let (state, cmds) = update(msg, state);
        self.state = state;
        debug_assert!(self.state.is_consistent());

        self.controller.render(&self.state);

        cmds.into_iter()
            .flat_map(Cmd::flatten)
            .filter_map(|cmd| self.execute(cmd))
            .collect()
    }

    fn execute(&mut self, cmd: Cmd) -> Option<Delivery> {
        match cmd {
            Cmd::Notify { seq, notification } => Some(self.notifier.submit(seq, notification)),
            Cmd::LogError { message } => {
                log::error!("{message}");
                self.error_count += 1;
                self.last_error = Some(message);
                None
            }
            Cmd::LogDebug { message } => {
                log::debug!("{message}");
                None
            }
            Cmd::Batch(_) | Cmd::None => None,
        }
    }
}
