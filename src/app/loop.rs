use crate::app::{
    action::Action, handler::handle_command, input::map_event_to_action, reducer,
    state::AppState, ui,
};
use crate::domain::executor::CommandExecutor;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info};

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState,
    executor: Arc<dyn CommandExecutor>,
) -> Result<()> {
    // Terminal events are read on a blocking thread and marshalled onto the
    // UI loop through this channel; the hotkey never touches state directly.
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, executor, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    executor: Arc<dyn CommandExecutor>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);
    info!("Palette loop started");

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                let size = terminal.size()?;
                map_event_to_action(event, &app_state, size)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if action != Action::Tick {
                debug!(?action, "Dispatching action");
            }

            let commands = reducer::update(&mut app_state, action);
            if app_state.should_quit {
                break;
            }

            for command in commands {
                handle_command(command, executor.clone(), action_tx.clone());
            }
        }
    }

    info!("Palette loop stopped");
    Ok(())
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
