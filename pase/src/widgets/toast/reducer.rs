use std::time::Instant;

use super::command::ToastCommand;
use super::state::ToastState;

/// Reduce a toast command into state updates.
pub(crate) fn reduce(state: &mut ToastState, command: ToastCommand) {
    match command {
        ToastCommand::Push(notice) => {
            log::debug!("toast {:?}: {}", notice.kind, notice.text);
            state.push(notice, Instant::now());
        },
        ToastCommand::Dismiss { id } => {
            state.dismiss(id);
        },
        ToastCommand::Tick { now } => {
            state.expire(now);
        },
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::widgets::toast::model::Notice;
    use crate::widgets::toast::state::{MAX_VISIBLE_TOASTS, TOAST_LIFETIME};

    #[test]
    fn given_full_stack_when_pushing_then_oldest_toast_is_evicted() {
        let mut state = ToastState::default();
        let now = Instant::now();

        for index in 0..=MAX_VISIBLE_TOASTS {
            state.push(Notice::info(format!("notice {index}")), now);
        }

        let texts: Vec<&str> = state
            .toasts()
            .map(|toast| toast.notice().text.as_str())
            .collect();
        assert_eq!(texts, vec!["notice 1", "notice 2", "notice 3", "notice 4"]);
    }

    #[test]
    fn given_toasts_when_lifetime_elapses_then_tick_expires_them() {
        let mut state = ToastState::default();
        let start = Instant::now();
        state.push(Notice::error("first"), start);
        state.push(Notice::success("second"), start + Duration::from_secs(2));

        reduce(
            &mut state,
            ToastCommand::Tick {
                now: start + TOAST_LIFETIME,
            },
        );

        assert_eq!(state.len(), 1);
        let remaining: Vec<&str> = state
            .toasts()
            .map(|toast| toast.notice().text.as_str())
            .collect();
        assert_eq!(remaining, vec!["second"]);
    }

    #[test]
    fn given_toast_when_dismissed_then_only_that_toast_is_removed() {
        let mut state = ToastState::default();
        let now = Instant::now();
        let first = state.push(Notice::info("a"), now);
        state.push(Notice::info("b"), now);

        reduce(&mut state, ToastCommand::Dismiss { id: first });

        assert_eq!(state.len(), 1);
        assert!(!state.dismiss(first));
    }

    #[test]
    fn given_push_command_then_toast_is_visible() {
        let mut state = ToastState::default();

        reduce(&mut state, ToastCommand::Push(Notice::error("network down")));

        assert!(!state.is_empty());
    }
}
