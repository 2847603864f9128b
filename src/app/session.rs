//! The palette's behavioral core.
//!
//! A [`CommandSession`] owns the input buffer, the MRU history and the
//! transient status. It never talks to a backend or a clock directly:
//! [`CommandSession::submit`] hands back a [`Submission`] for the runtime
//! to execute, and every status comes with a [`StatusToken`] the runtime
//! feeds back through [`CommandSession::expire_status`] once the display
//! duration has passed.

use super::config::PaletteConfig;
use super::status::{StatusMessage, StatusTimer, StatusToken};
use crate::domain::executor::ExecutionError;
use crate::domain::focus_bus::{FocusBus, Subscription};
use crate::domain::history::{HistoryError, HistoryStore};
use crate::domain::models::ExecutionOutcome;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, warn};

pub const STATUS_DISPLAY_DURATION: Duration = Duration::from_secs(2);
pub const RECEIVED_PREFIX: &str = "Command received: ";

/// Snapshot of what the palette shows.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub input_buffer: String,
    pub status_message: Option<StatusMessage>,
    pub is_input_focused: bool,
}

/// A command accepted by [`CommandSession::submit`], waiting to be run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub text: String,
    pub token: StatusToken,
}

#[derive(Debug)]
pub struct CommandSession {
    history: HistoryStore,
    input_buffer: String,
    status: StatusTimer,
    focused: Rc<Cell<bool>>,
    focus_subscription: Option<Subscription>,
    latest_submission: Option<StatusToken>,
    reset_input_on_show: bool,
}

impl Default for CommandSession {
    fn default() -> Self {
        Self::new(&PaletteConfig::default())
    }
}

impl CommandSession {
    #[must_use]
    pub fn new(config: &PaletteConfig) -> Self {
        Self {
            history: HistoryStore::with_seed(config.max_history, &config.initial_history),
            input_buffer: String::new(),
            status: StatusTimer::new(config.status_display()),
            focused: Rc::new(Cell::new(false)),
            focus_subscription: None,
            latest_submission: None,
            reset_input_on_show: config.reset_input_on_show,
        }
    }

    /// Grants input focus on every `bus` signal. Attaching again replaces
    /// the previous subscription.
    pub fn attach(&mut self, bus: &FocusBus) {
        let focused = Rc::clone(&self.focused);
        self.focus_subscription = Some(bus.subscribe(move || focused.set(true)));
    }

    pub fn detach(&mut self) {
        self.focus_subscription = None;
    }

    /// Palette revealed. An attached session waits for the bus signal to
    /// take focus; a detached one takes it directly.
    pub fn show(&mut self) {
        if self.reset_input_on_show {
            self.input_buffer.clear();
        }
        if self.focus_subscription.is_none() {
            self.request_focus();
        }
        debug!(buffer_len = self.input_buffer.len(), "Palette shown");
    }

    /// Palette hidden. Buffer and pending status survive until the next
    /// reveal.
    pub fn dismiss(&mut self) {
        self.blur();
        debug!("Palette dismissed");
    }

    pub fn request_focus(&mut self) {
        self.focused.set(true);
    }

    pub fn blur(&mut self) {
        self.focused.set(false);
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_buffer = text.into();
    }

    pub fn insert_char(&mut self, c: char) {
        self.input_buffer.push(c);
    }

    pub fn delete_char(&mut self) {
        self.input_buffer.pop();
    }

    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
    }

    /// Copies a history entry into the buffer without reordering history.
    pub fn select_history_entry(&mut self, entry: &str) -> Result<(), HistoryError> {
        if !self.history.contains(entry) {
            return Err(HistoryError::UnknownEntry(entry.to_string()));
        }
        self.input_buffer = entry.to_string();
        self.request_focus();
        Ok(())
    }

    /// Accepts the trimmed buffer. Blank input is ignored and returns
    /// `None` without touching history or status.
    pub fn submit(&mut self) -> Option<Submission> {
        let text = self.input_buffer.trim().to_string();
        if text.is_empty() {
            return None;
        }

        if let Err(e) = self.history.record(&text) {
            warn!("Failed to record history entry: {e}");
        }
        self.input_buffer.clear();
        let token = self
            .status
            .show(format!("{RECEIVED_PREFIX}{text}"), false);
        self.latest_submission = Some(token);
        self.request_focus();

        debug!(command = %text, "Command submitted");
        Some(Submission { text, token })
    }

    /// Applies the executor's verdict for `submission`. Returns the token of
    /// a newly shown error status, which needs its own clear timer.
    ///
    /// History keeps the entry on failure; the submission already
    /// happened. Failures of superseded submissions are only logged.
    pub fn handle_outcome(
        &mut self,
        submission: StatusToken,
        result: &Result<ExecutionOutcome, ExecutionError>,
    ) -> Option<StatusToken> {
        match result {
            Ok(outcome) => {
                debug!(command = %outcome.command, output = ?outcome.output, "Command executed");
                None
            }
            Err(e) if self.latest_submission == Some(submission) => {
                warn!("Command failed: {e}");
                Some(self.status.show(e.to_string(), true))
            }
            Err(e) => {
                warn!("Ignoring failure of superseded command: {e}");
                None
            }
        }
    }

    /// Clears the status unless a newer one replaced it since `token`.
    pub fn expire_status(&mut self, token: StatusToken) -> bool {
        let cleared = self.status.expire(token);
        if !cleared {
            debug!(?token, "Stale status timer ignored");
        }
        cleared
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input_buffer
    }

    #[must_use]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.current()
    }

    #[must_use]
    pub fn status_display(&self) -> Duration {
        self.status.display_for()
    }

    #[must_use]
    pub fn is_input_focused(&self) -> bool {
        self.focused.get()
    }

    #[must_use]
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        SessionState {
            input_buffer: self.input_buffer.clone(),
            status_message: self.status.current().cloned(),
            is_input_focused: self.focused.get(),
        }
    }
}
