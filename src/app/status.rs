use chrono::{DateTime, Local};
use std::time::Duration;

/// Identifies one shown status. Tokens only grow, so an expiry carrying an
/// older token than the current one belongs to a superseded timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatusToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub shown_at: DateTime<Local>,
}

#[derive(Debug, Clone)]
pub struct StatusTimer {
    generation: u64,
    active: Option<(StatusToken, StatusMessage)>,
    display_for: Duration,
}

impl StatusTimer {
    #[must_use]
    pub fn new(display_for: Duration) -> Self {
        Self {
            generation: 0,
            active: None,
            display_for,
        }
    }

    /// Replaces the current status. The caller schedules the clear for the
    /// returned token after [`display_for`](Self::display_for).
    pub fn show(&mut self, text: impl Into<String>, is_error: bool) -> StatusToken {
        self.generation += 1;
        let token = StatusToken(self.generation);
        self.active = Some((
            token,
            StatusMessage {
                text: text.into(),
                is_error,
                shown_at: Local::now(),
            },
        ));
        token
    }

    /// Clears the status if `token` is still the current one.
    pub fn expire(&mut self, token: StatusToken) -> bool {
        match &self.active {
            Some((current, _)) if *current == token => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&StatusMessage> {
        self.active.as_ref().map(|(_, message)| message)
    }

    #[must_use]
    pub fn display_for(&self) -> Duration {
        self.display_for
    }
}
