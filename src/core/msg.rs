use serde::{Deserialize, Serialize};

use crate::core::{notification::NotifyOutcome, state::Control};

/// Events that can change a feedback widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    /// The user selected a control
    Clicked(Control),
    /// The pointer moved over a control
    PointerEntered(Control),
    /// The pointer left a control
    PointerLeft(Control),
    /// A notification finished, successfully or not
    NotificationSettled {
        seq: u64,
        liked: bool,
        outcome: NotifyOutcome,
    },
}

impl Msg {
    /// Convenience for selecting by wire value
    pub fn select(liked: bool) -> Self {
        Msg::Clicked(Control::from(liked))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Msg::Clicked(_) => "Clicked",
            Msg::PointerEntered(_) => "PointerEntered",
            Msg::PointerLeft(_) => "PointerLeft",
            Msg::NotificationSettled { .. } => "NotificationSettled",
        }
    }
}
