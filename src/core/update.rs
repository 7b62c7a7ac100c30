use crate::core::{cmd::Cmd, msg::Msg, notification::LikeNotification, state::WidgetState};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: WidgetState) -> (WidgetState, Vec<Cmd>) {
    match msg {
        Msg::Clicked(control) => {
            // Re-clicking the committed control is a no-op: no re-render, no request
            if state.feedback == control.requested_state() {
                return (state, vec![]);
            }

            state.commit(control);
            let seq = state.allocate_seq();
            let notification = LikeNotification::from(control);
            (state, vec![Cmd::Notify { seq, notification }])
        }

        Msg::PointerEntered(control) => {
            state.control_mut(control).hover_enter();
            (state, vec![])
        }

        Msg::PointerLeft(control) => {
            state.control_mut(control).hover_leave();
            (state, vec![])
        }

        Msg::NotificationSettled {
            seq,
            liked,
            outcome,
        } => {
            state.in_flight = state.in_flight.saturating_sub(1);
            let cmds = match outcome.diagnostic() {
                Some(message) => vec![Cmd::LogError {
                    message: format!("{message} [seq={seq}, liked={liked}]"),
                }],
                None => vec![Cmd::LogDebug {
                    message: format!("Like status delivered [seq={seq}, liked={liked}]"),
                }],
            };
            // No rollback: the presentation stays committed whatever the server said
            state.last_outcome = Some(outcome);
            (state, cmds)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::core::{
        notification::NotifyOutcome,
        state::{Control, ControlMode, FeedbackState},
    };

    #[fixture]
    fn state() -> WidgetState {
        WidgetState::new()
    }

    fn run(msgs: Vec<Msg>, state: WidgetState) -> (WidgetState, Vec<Cmd>) {
        msgs.into_iter()
            .fold((state, vec![]), |(state, mut all), msg| {
                let (state, cmds) = update(msg, state);
                all.extend(cmds);
                (state, all)
            })
    }

    fn notifications(cmds: &[Cmd]) -> Vec<bool> {
        cmds.iter()
            .filter_map(|cmd| match cmd {
                Cmd::Notify { notification, .. } => Some(notification.liked),
                _ => None,
            })
            .collect()
    }

    #[rstest]
    #[case(Control::Like, true)]
    #[case(Control::Dislike, false)]
    fn test_first_click_notifies_once(
        state: WidgetState,
        #[case] control: Control,
        #[case] liked: bool,
    ) {
        let (new_state, cmds) = update(Msg::Clicked(control), state);
        assert_eq!(
            cmds,
            vec![Cmd::Notify {
                seq: 0,
                notification: LikeNotification::new(liked),
            }]
        );
        assert!(new_state.control(control).is_committed());
        assert_eq!(new_state.in_flight, 1);
    }

    #[rstest]
    fn test_repeat_click_is_ignored(state: WidgetState) {
        let (state, _) = update(Msg::Clicked(Control::Like), state);
        let before = state.clone();
        let (state, cmds) = update(Msg::Clicked(Control::Like), state);
        assert!(cmds.is_empty());
        assert_eq!(state.feedback, before.feedback);
        assert_eq!(state.next_seq, before.next_seq);
    }

    #[rstest]
    fn test_like_then_dislike(state: WidgetState) {
        let (state, cmds) = run(
            vec![Msg::Clicked(Control::Like), Msg::Clicked(Control::Dislike)],
            state,
        );
        assert_eq!(notifications(&cmds), vec![true, false]);
        assert_eq!(state.feedback, FeedbackState::Disliked);
        assert_eq!(state.control(Control::Like).mode(), ControlMode::Neutral);
        assert_eq!(
            state.control(Control::Dislike).mode(),
            ControlMode::Committed
        );
    }

    #[rstest]
    fn test_click_sequence_commits_last_effective_click(state: WidgetState) {
        let clicks = [
            Control::Dislike,
            Control::Dislike,
            Control::Like,
            Control::Like,
            Control::Dislike,
            Control::Like,
        ];
        let (state, cmds) = run(clicks.iter().copied().map(Msg::Clicked).collect(), state);
        assert_eq!(notifications(&cmds), vec![false, true, false, true]);
        assert_eq!(state.feedback, FeedbackState::Liked);
        assert!(state.is_consistent());

        let seqs: Vec<u64> = cmds
            .iter()
            .filter_map(|cmd| match cmd {
                Cmd::Notify { seq, .. } => Some(*seq),
                _ => None,
            })
            .collect();
        assert_eq!(seqs, vec![0, 1, 2, 3]);
    }

    #[rstest]
    fn test_hover_neutral_control(state: WidgetState) {
        let (state, cmds) = update(Msg::PointerEntered(Control::Like), state);
        assert!(cmds.is_empty());
        assert!(state.control(Control::Like).is_hovered());

        let (state, _) = update(Msg::PointerLeft(Control::Like), state);
        assert!(!state.control(Control::Like).is_hovered());
    }

    #[rstest]
    fn test_hover_committed_control_has_no_effect(state: WidgetState) {
        let (state, _) = run(
            vec![
                Msg::Clicked(Control::Dislike),
                Msg::PointerEntered(Control::Dislike),
            ],
            state,
        );
        assert!(!state.control(Control::Dislike).is_hovered());
    }

    #[rstest]
    fn test_click_clears_hover_on_both_controls(state: WidgetState) {
        let (state, _) = run(
            vec![
                Msg::PointerEntered(Control::Like),
                Msg::PointerEntered(Control::Dislike),
                Msg::Clicked(Control::Like),
            ],
            state,
        );
        assert!(!state.control(Control::Like).is_hovered());
        assert!(!state.control(Control::Dislike).is_hovered());
    }

    #[rstest]
    fn test_successful_settlement_only_logs_debug(state: WidgetState) {
        let (state, _) = update(Msg::Clicked(Control::Like), state);
        let (state, cmds) = update(
            Msg::NotificationSettled {
                seq: 0,
                liked: true,
                outcome: NotifyOutcome::Delivered,
            },
            state,
        );
        assert_eq!(
            cmds,
            vec![Cmd::LogDebug {
                message: "Like status delivered [seq=0, liked=true]".to_string(),
            }]
        );
        assert_eq!(state.in_flight, 0);
        assert_eq!(state.last_outcome, Some(NotifyOutcome::Delivered));
    }

    #[rstest]
    #[case(NotifyOutcome::Rejected { status: 500 })]
    #[case(NotifyOutcome::Failed { reason: "connection refused".to_string() })]
    fn test_failed_settlement_logs_once_without_rollback(
        state: WidgetState,
        #[case] outcome: NotifyOutcome,
    ) {
        let (state, _) = update(Msg::Clicked(Control::Like), state);
        let (state, cmds) = update(
            Msg::NotificationSettled {
                seq: 0,
                liked: true,
                outcome,
            },
            state,
        );
        assert_eq!(cmds.len(), 1);
        assert!(matches!(cmds[0], Cmd::LogError { .. }));
        assert_eq!(state.feedback, FeedbackState::Liked);
        assert!(state.control(Control::Like).is_committed());
    }
}
