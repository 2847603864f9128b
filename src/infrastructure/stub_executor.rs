use crate::app::config::ExecutorConfig;
use crate::domain::{
    executor::{CommandExecutor, ExecutionError},
    models::ExecutionOutcome,
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// Executor used until real command routing exists. Accepts everything
/// after an optional simulated latency, except commands starting with the
/// configured reject prefix.
#[derive(Debug, Clone, Default)]
pub struct StubExecutor {
    latency: Duration,
    reject_prefix: Option<String>,
}

impl StubExecutor {
    pub fn new(latency: Duration, reject_prefix: Option<String>) -> Self {
        Self {
            latency,
            reject_prefix: reject_prefix.filter(|p| !p.trim().is_empty()),
        }
    }

    pub fn from_config(config: &ExecutorConfig) -> Self {
        Self::new(
            Duration::from_millis(config.latency_ms),
            config.reject_prefix.clone(),
        )
    }
}

#[async_trait]
impl CommandExecutor for StubExecutor {
    async fn run(&self, text: &str) -> Result<ExecutionOutcome, ExecutionError> {
        if !self.latency.is_zero() {
            debug!(latency = ?self.latency, "Simulating executor latency");
            tokio::time::sleep(self.latency).await;
        }

        if let Some(prefix) = &self.reject_prefix {
            if text.starts_with(prefix.as_str()) {
                return Err(ExecutionError::Rejected(text.to_string()));
            }
        }

        info!(command = text, "Command accepted");
        Ok(ExecutionOutcome {
            command: text.to_string(),
            output: Some(format!("Accepted \"{}\"", text)),
        })
    }
}
