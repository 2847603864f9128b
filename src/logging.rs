use crate::app::config::{get_config_dir, PaletteConfig};
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "luna.log";

/// Routes `tracing` output to a log file so it never paints over the TUI.
/// `RUST_LOG` wins over the configured level.
pub fn init(config: &PaletteConfig) -> Result<PathBuf> {
    let log_path = log_file_path(get_config_dir().as_deref());
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create log directory '{}'", parent.display())
            })?;
        }
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file '{}'", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_level))
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(log_file))
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(log_path)
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn log_file_path(config_dir: Option<&Path>) -> PathBuf {
    config_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            log_file_path(Some(dir.path())),
            dir.path().join("luna.log")
        );
        assert_eq!(
            log_file_path(None),
            std::env::temp_dir().join("luna.log")
        );
    }
}
