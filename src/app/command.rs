use crate::app::session::Submission;
use crate::app::status::StatusToken;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Execute(Submission),
    ClearStatusAfter(StatusToken, Duration),
}
