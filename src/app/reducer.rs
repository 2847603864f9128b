use super::{action::Action, command::Command, state::AppState, trigger};
use tracing::warn;

pub fn update(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        // --- Reveal ---
        Action::TogglePalette => trigger::toggle(state),
        Action::HidePalette => trigger::hide(state),
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Input ---
        Action::FocusInput => {
            if state.palette_visible {
                state.session.request_focus();
            }
        }
        Action::InsertChar(c) => {
            if state.palette_visible {
                state.session.insert_char(c);
                state.session.request_focus();
            }
        }
        Action::DeleteChar => state.session.delete_char(),
        Action::ClearInput => state.session.clear_input(),
        Action::Submit => {
            if let Some(submission) = state.session.submit() {
                state.history_cursor = 0;
                let clear = Command::ClearStatusAfter(
                    submission.token,
                    state.session.status_display(),
                );
                return vec![Command::Execute(submission), clear];
            }
        }

        // --- History List ---
        Action::HistoryNext => {
            let len = state.session.history().len();
            if len == 0 {
                return Vec::new();
            }
            if state.session.is_input_focused() {
                state.session.blur();
                state.history_cursor = 0;
            } else {
                state.history_cursor = (state.history_cursor + 1).min(len - 1);
            }
        }
        Action::HistoryPrev => {
            if !state.session.is_input_focused() {
                if state.history_cursor == 0 {
                    state.session.request_focus();
                } else {
                    state.history_cursor -= 1;
                }
            }
        }
        Action::SelectHistoryEntry(index) => select_entry(state, index),
        Action::SelectHighlightedEntry => select_entry(state, state.history_cursor),

        // --- Async Results ---
        Action::ExecutionFinished { submission, result } => {
            if let Some(token) = state.session.handle_outcome(submission, &result) {
                return vec![Command::ClearStatusAfter(
                    token,
                    state.session.status_display(),
                )];
            }
        }
        Action::StatusExpired(token) => {
            state.session.expire_status(token);
        }

        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
        }
    }
    Vec::new()
}

fn select_entry(state: &mut AppState, index: usize) {
    let Some(entry) = state.session.history().get(index).cloned() else {
        return;
    };
    match state.session.select_history_entry(entry.as_str()) {
        Ok(()) => state.history_cursor = index,
        Err(e) => warn!("History selection failed: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::PaletteConfig;
    use crate::domain::executor::ExecutionError;
    use std::time::Duration;

    fn shown_state(history: &[&str]) -> AppState {
        let config = PaletteConfig {
            initial_history: history.iter().map(ToString::to_string).collect(),
            ..Default::default()
        };
        let mut state = AppState::new(&config);
        update(&mut state, Action::TogglePalette);
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            update(state, Action::InsertChar(c));
        }
    }

    #[test]
    fn test_submit_emits_execute_and_timer() {
        let mut state = shown_state(&[]);
        type_text(&mut state, "mute");

        let commands = update(&mut state, Action::Submit);

        assert_eq!(commands.len(), 2);
        let Command::Execute(submission) = &commands[0] else {
            panic!("Expected Command::Execute, got {:?}", commands[0]);
        };
        assert_eq!(submission.text, "mute");
        assert_eq!(
            commands[1],
            Command::ClearStatusAfter(submission.token, Duration::from_secs(2))
        );
        assert_eq!(state.session.input(), "");
    }

    #[test]
    fn test_blank_submit_emits_nothing() {
        let mut state = shown_state(&["mute"]);
        type_text(&mut state, "   ");
        assert!(update(&mut state, Action::Submit).is_empty());
        assert_eq!(state.session.history().len(), 1);
        assert!(state.session.status().is_none());
    }

    #[test]
    fn test_typing_ignored_while_hidden() {
        let mut state = AppState::default();
        type_text(&mut state, "abc");
        assert_eq!(state.session.input(), "");
    }

    #[test]
    fn test_history_navigation_and_select() {
        let mut state = shown_state(&["newest", "middle", "oldest"]);
        assert!(state.session.is_input_focused());

        update(&mut state, Action::HistoryNext);
        assert!(state.is_history_focused());
        assert_eq!(state.history_cursor, 0);

        update(&mut state, Action::HistoryNext);
        update(&mut state, Action::HistoryNext);
        update(&mut state, Action::HistoryNext);
        assert_eq!(state.history_cursor, 2);

        update(&mut state, Action::HistoryPrev);
        update(&mut state, Action::SelectHighlightedEntry);
        assert_eq!(state.session.input(), "middle");
        assert!(state.session.is_input_focused());

        let order: Vec<String> = state
            .session
            .history()
            .entries()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(order, vec!["newest", "middle", "oldest"]);
    }

    #[test]
    fn test_history_prev_at_top_returns_to_input() {
        let mut state = shown_state(&["only"]);
        update(&mut state, Action::HistoryNext);
        assert!(!state.session.is_input_focused());
        update(&mut state, Action::HistoryPrev);
        assert!(state.session.is_input_focused());
    }

    #[test]
    fn test_history_next_with_empty_history_keeps_focus() {
        let mut state = shown_state(&[]);
        update(&mut state, Action::HistoryNext);
        assert!(state.session.is_input_focused());
    }

    #[test]
    fn test_click_out_of_range_is_ignored() {
        let mut state = shown_state(&["only"]);
        type_text(&mut state, "draft");
        update(&mut state, Action::SelectHistoryEntry(4));
        assert_eq!(state.session.input(), "draft");
    }

    #[test]
    fn test_failure_schedules_error_timer() {
        let mut state = shown_state(&[]);
        type_text(&mut state, "explode");
        let commands = update(&mut state, Action::Submit);
        let Command::Execute(submission) = &commands[0] else {
            panic!("Expected Command::Execute");
        };

        let commands = update(
            &mut state,
            Action::ExecutionFinished {
                submission: submission.token,
                result: Err(ExecutionError::Rejected("explode".to_string())),
            },
        );

        assert_eq!(commands.len(), 1);
        let status = state.session.status().unwrap();
        assert!(status.is_error);
        assert_eq!(status.text, "Command rejected: explode");
        assert_eq!(state.session.history().len(), 1);
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::default();
        update(&mut state, Action::Quit);
        assert!(state.should_quit);
    }
}
