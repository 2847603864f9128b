use crate::domain::models::ExecutionOutcome;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("Command rejected: {0}")]
    Rejected(String),

    #[error("Command failed: {0}")]
    Failed(String),
}

// Backend that receives submitted palette commands. Only trimmed,
// non-empty text is ever passed in.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn run(&self, text: &str) -> Result<ExecutionOutcome, ExecutionError>;
}
