use serde::{Deserialize, Serialize};

use crate::core::state::{Control, FeedbackState};

/// Payload posted to the remote endpoint on every effective state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeNotification {
    #[serde(rename = "Liked")]
    pub liked: bool,
}

impl LikeNotification {
    pub fn new(liked: bool) -> Self {
        Self { liked }
    }

    /// Notification for a state; `Unset` is never sent
    pub fn for_state(state: FeedbackState) -> Option<Self> {
        state.liked().map(Self::new)
    }
}

impl From<Control> for LikeNotification {
    fn from(control: Control) -> Self {
        Self::new(control == Control::Like)
    }
}

/// How a single notification resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotifyOutcome {
    /// The endpoint answered with a 2xx status
    Delivered,
    /// The endpoint answered with a non-success status
    Rejected { status: u16 },
    /// The request never completed (connect, DNS, timeout, ...)
    Failed { reason: String },
    /// The delivery worker shut down before the request was made
    Abandoned,
}

impl NotifyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, NotifyOutcome::Delivered)
    }

    /// Operator-facing diagnostic, `None` for a successful delivery
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            NotifyOutcome::Delivered => None,
            NotifyOutcome::Rejected { status } => {
                Some(format!("Failed to submit like status (HTTP {status})"))
            }
            NotifyOutcome::Failed { reason } => {
                Some(format!("Error submitting like status: {reason}"))
            }
            NotifyOutcome::Abandoned => {
                Some("Like status was not submitted: notifier stopped".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wire_format() -> serde_json::Result<()> {
        assert_eq!(
            serde_json::to_string(&LikeNotification::new(true))?,
            r#"{"Liked":true}"#
        );
        assert_eq!(
            serde_json::to_string(&LikeNotification::new(false))?,
            r#"{"Liked":false}"#
        );
        Ok(())
    }

    #[test]
    fn test_decode_server_payload() -> serde_json::Result<()> {
        let notification: LikeNotification = serde_json::from_str(r#"{ "Liked": false }"#)?;
        assert_eq!(notification, LikeNotification::new(false));
        Ok(())
    }

    #[test]
    fn test_unset_is_never_sent() {
        assert_eq!(LikeNotification::for_state(FeedbackState::Unset), None);
        assert_eq!(
            LikeNotification::for_state(FeedbackState::Disliked),
            Some(LikeNotification::new(false))
        );
    }

    #[test]
    fn test_from_control() {
        assert!(LikeNotification::from(Control::Like).liked);
        assert!(!LikeNotification::from(Control::Dislike).liked);
    }

    #[test]
    fn test_diagnostic() {
        assert_eq!(NotifyOutcome::Delivered.diagnostic(), None);
        assert_eq!(
            NotifyOutcome::Rejected { status: 500 }.diagnostic(),
            Some("Failed to submit like status (HTTP 500)".to_string())
        );
        assert!(NotifyOutcome::Failed {
            reason: "connection refused".to_string()
        }
        .diagnostic()
        .is_some_and(|message| message.contains("connection refused")));
    }
}
