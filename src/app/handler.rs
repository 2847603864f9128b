use crate::app::{action::Action, command::Command};
use crate::domain::executor::CommandExecutor;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

pub fn handle_command(
    command: Command,
    executor: Arc<dyn CommandExecutor>,
    tx: mpsc::Sender<Action>,
) {
    match command {
        Command::Execute(submission) => {
            tokio::spawn(async move {
                let result = executor.run(&submission.text).await;
                let _ = tx
                    .send(Action::ExecutionFinished {
                        submission: submission.token,
                        result,
                    })
                    .await;
            });
        }
        Command::ClearStatusAfter(token, delay) => {
            // The deadline is fixed now, not when the task first runs.
            let deadline = tokio::time::Instant::now() + delay;
            debug!(?token, ?delay, "Status clear scheduled");
            tokio::spawn(async move {
                tokio::time::sleep_until(deadline).await;
                let _ = tx.send(Action::StatusExpired(token)).await;
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crate::app::state::AppState;
    use crate::domain::executor::{ExecutionError, MockCommandExecutor};
    use crate::domain::models::ExecutionOutcome;
    use std::time::Duration;

    fn echo_executor() -> Arc<MockCommandExecutor> {
        let mut mock = MockCommandExecutor::new();
        mock.expect_run().returning(|text| {
            Ok(ExecutionOutcome {
                command: text.to_string(),
                output: None,
            })
        });
        Arc::new(mock)
    }

    fn submit(state: &mut AppState, text: &str) -> Vec<Command> {
        state.session.set_input(text);
        reducer::update(state, Action::Submit)
    }

    fn dispatch(
        commands: Vec<Command>,
        executor: &Arc<MockCommandExecutor>,
        tx: &mpsc::Sender<Action>,
    ) {
        for command in commands {
            handle_command(command, executor.clone(), tx.clone());
        }
    }

    #[tokio::test]
    async fn test_execute_reports_outcome() {
        let mut mock = MockCommandExecutor::new();
        mock.expect_run()
            .with(mockall::predicate::eq("open safari"))
            .times(1)
            .returning(|_| Err(ExecutionError::Failed("no such app".to_string())));
        let executor = Arc::new(mock);
        let (tx, mut rx) = mpsc::channel(4);

        let mut state = AppState::default();
        reducer::update(&mut state, Action::TogglePalette);
        let commands = submit(&mut state, "open safari");
        let Command::Execute(submission) = commands[0].clone() else {
            panic!("Expected Command::Execute, got {:?}", commands[0]);
        };
        handle_command(Command::Execute(submission.clone()), executor, tx);

        let action = rx.recv().await.unwrap();
        assert_eq!(
            action,
            Action::ExecutionFinished {
                submission: submission.token,
                result: Err(ExecutionError::Failed("no such app".to_string())),
            }
        );

        let follow_up = reducer::update(&mut state, action);
        assert!(matches!(follow_up[..], [Command::ClearStatusAfter(_, _)]));
        assert!(state.session.status().unwrap().is_error);
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_clears_after_display_duration() {
        let executor = echo_executor();
        let (tx, mut rx) = mpsc::channel(8);
        let mut state = AppState::default();
        reducer::update(&mut state, Action::TogglePalette);

        dispatch(submit(&mut state, "mute"), &executor, &tx);

        // Executor result arrives first and leaves the status alone.
        let action = rx.recv().await.unwrap();
        assert!(matches!(action, Action::ExecutionFinished { .. }));
        assert!(reducer::update(&mut state, action).is_empty());

        tokio::time::advance(Duration::from_millis(1999)).await;
        assert!(rx.try_recv().is_err());
        assert!(state.session.status().is_some());

        let action = rx.recv().await.unwrap();
        assert!(matches!(action, Action::StatusExpired(_)));
        reducer::update(&mut state, action);
        assert!(state.session.status().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_supersedes_first_timer() {
        let executor = echo_executor();
        let (tx, mut rx) = mpsc::channel(8);
        let mut state = AppState::default();
        reducer::update(&mut state, Action::TogglePalette);
        let start = tokio::time::Instant::now();

        dispatch(submit(&mut state, "first"), &executor, &tx);
        tokio::time::advance(Duration::from_secs(1)).await;
        dispatch(submit(&mut state, "second"), &executor, &tx);

        let mut clears = Vec::new();
        while clears.len() < 2 {
            let action = rx.recv().await.unwrap();
            if let Action::StatusExpired(_) = action {
                let visible_before = state.session.status().cloned();
                reducer::update(&mut state, action);
                let visible_after = state.session.status().cloned();
                clears.push((start.elapsed(), visible_before, visible_after));
            } else {
                reducer::update(&mut state, action);
            }
        }

        // First timer fires at 2s: stale, the second message stays.
        let (at, before, after) = &clears[0];
        assert!(*at >= Duration::from_secs(2) && *at < Duration::from_secs(3));
        assert_eq!(
            before.as_ref().map(|s| s.text.as_str()),
            Some("Command received: second")
        );
        assert_eq!(before, after);

        // Second timer fires at 3s and clears exactly once.
        let (at, _, after) = &clears[1];
        assert!(*at >= Duration::from_secs(3) && *at < Duration::from_secs(4));
        assert!(after.is_none());
    }
}
