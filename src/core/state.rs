use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::core::notification::NotifyOutcome;

/// The user's current choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum FeedbackState {
    #[default]
    Unset,
    Liked,
    Disliked,
}

impl FeedbackState {
    /// Wire value for this state; `None` while nothing has been chosen yet
    pub fn liked(self) -> Option<bool> {
        match self {
            FeedbackState::Unset => None,
            FeedbackState::Liked => Some(true),
            FeedbackState::Disliked => Some(false),
        }
    }

    /// The control currently holding the committed presentation
    pub fn committed_control(self) -> Option<Control> {
        match self {
            FeedbackState::Unset => None,
            FeedbackState::Liked => Some(Control::Like),
            FeedbackState::Disliked => Some(Control::Dislike),
        }
    }
}

impl From<bool> for FeedbackState {
    fn from(liked: bool) -> Self {
        if liked {
            FeedbackState::Liked
        } else {
            FeedbackState::Disliked
        }
    }
}

/// One of the two clickable controls
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Control {
    Like,
    Dislike,
}

impl Control {
    pub fn other(self) -> Control {
        match self {
            Control::Like => Control::Dislike,
            Control::Dislike => Control::Like,
        }
    }

    /// State requested by clicking this control
    pub fn requested_state(self) -> FeedbackState {
        match self {
            Control::Like => FeedbackState::Liked,
            Control::Dislike => FeedbackState::Disliked,
        }
    }
}

impl From<bool> for Control {
    fn from(liked: bool) -> Self {
        if liked {
            Control::Like
        } else {
            Control::Dislike
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlMode {
    /// Hover-reactive, unemphasized unless the pointer is over it
    #[default]
    Neutral,
    /// Selected by the user; hover is ignored
    Committed,
}

/// Presentation-relevant state of a single control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ControlState {
    mode: ControlMode,
    hovered: bool,
}

impl ControlState {
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn is_committed(&self) -> bool {
        self.mode == ControlMode::Committed
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Reset to the unemphasized style and make the control hover-reactive again
    pub fn set_neutral_presentation(&mut self) {
        self.mode = ControlMode::Neutral;
        self.hovered = false;
    }

    /// Apply the activated style; hovering no longer changes the control
    pub fn set_committed_presentation(&mut self) {
        self.mode = ControlMode::Committed;
        self.hovered = false;
    }

    /// Returns true if the control changed
    pub fn hover_enter(&mut self) -> bool {
        if self.is_committed() || self.hovered {
            return false;
        }
        self.hovered = true;
        true
    }

    /// Returns true if the control changed
    pub fn hover_leave(&mut self) -> bool {
        if self.is_committed() || !self.hovered {
            return false;
        }
        self.hovered = false;
        true
    }
}

/// State owned by one feedback widget instance
#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    pub feedback: FeedbackState,
    like: ControlState,
    dislike: ControlState,
    /// Sequence number assigned to the next notification
    pub next_seq: u64,
    /// Notifications submitted but not yet settled
    pub in_flight: usize,
    pub last_outcome: Option<NotifyOutcome>,
}

impl WidgetState {
    pub fn new() -> Self {
        let mut state = Self::default();
        state.like.set_neutral_presentation();
        state.dislike.set_neutral_presentation();
        state
    }

    pub fn control(&self, control: Control) -> &ControlState {
        match control {
            Control::Like => &self.like,
            Control::Dislike => &self.dislike,
        }
    }

    pub fn control_mut(&mut self, control: Control) -> &mut ControlState {
        match control {
            Control::Like => &mut self.like,
            Control::Dislike => &mut self.dislike,
        }
    }

    /// Both control modes agree with `feedback`
    pub fn is_consistent(&self) -> bool {
        let committed = self.feedback.committed_control();
        Control::iter().all(|control| {
            self.control(control).is_committed() == (committed == Some(control))
        })
    }

    /// Commit `control` and release the other one
    pub fn commit(&mut self, control: Control) {
        self.feedback = control.requested_state();
        self.control_mut(control).set_committed_presentation();
        self.control_mut(control.other()).set_neutral_presentation();
    }

    /// Hand out the sequence number for a new notification
    pub fn allocate_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight += 1;
        seq
    }
}
