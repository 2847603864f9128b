use super::keymap::parse_key_chord;
use super::session::STATUS_DISPLAY_DURATION;
use crate::domain::history::MAX_HISTORY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Upper bound for `max_history`; every entry gets a popover row.
pub const MAX_HISTORY_LIMIT: usize = 100;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExecutorConfig {
    pub latency_ms: u64,
    pub reject_prefix: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PaletteConfig {
    pub max_history: usize,
    pub status_display_ms: u64,
    pub initial_history: Vec<String>,
    pub reset_input_on_show: bool,
    pub hotkey: String,
    pub log_level: String,
    pub executor: ExecutorConfig,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            max_history: MAX_HISTORY,
            status_display_ms: STATUS_DISPLAY_DURATION.as_millis() as u64,
            initial_history: Vec::new(),
            reset_input_on_show: false,
            hotkey: "ctrl+space".to_string(),
            log_level: "info".to_string(),
            executor: ExecutorConfig::default(),
        }
    }
}

pub fn get_config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("luna");
        path
    })
}

impl PaletteConfig {
    /// Loads `~/.config/luna/config.toml`, falling back to defaults when
    /// there is no home directory or no file.
    pub fn load() -> Result<Self, ConfigError> {
        match get_config_dir() {
            Some(dir) => Self::load_from(&dir.join("config.toml")),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_history == 0 {
            return Err(ConfigError::Invalid(
                "max_history must be at least 1".to_string(),
            ));
        }
        if self.max_history > MAX_HISTORY_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max_history must be at most {MAX_HISTORY_LIMIT}, got {}",
                self.max_history
            )));
        }
        if self.status_display_ms == 0 {
            return Err(ConfigError::Invalid(
                "status_display_ms must be greater than 0".to_string(),
            ));
        }
        if parse_key_chord(&self.hotkey).is_none() {
            return Err(ConfigError::Invalid(format!(
                "unrecognized hotkey \"{}\"",
                self.hotkey
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn status_display(&self) -> Duration {
        Duration::from_millis(self.status_display_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PaletteConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, PaletteConfig::default());
        assert_eq!(config.status_display(), Duration::from_secs(2));
        assert_eq!(config.max_history, 5);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
max_history = 3
initial_history = ["open safari", "mute"]

[executor]
reject_prefix = "rm "
"#
        )
        .unwrap();

        let config = PaletteConfig::load_from(file.path()).unwrap();
        assert_eq!(config.max_history, 3);
        assert_eq!(config.initial_history, vec!["open safari", "mute"]);
        assert_eq!(config.executor.reject_prefix.as_deref(), Some("rm "));
        assert_eq!(config.executor.latency_ms, 0);
        assert_eq!(config.hotkey, "ctrl+space");
    }

    #[test]
    fn test_rejects_zero_history() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_history = 0").unwrap();
        let err = PaletteConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_oversized_history() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_history = 65535").unwrap();
        let err = PaletteConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let at_limit = PaletteConfig {
            max_history: MAX_HISTORY_LIMIT,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_default_display_matches_session_constant() {
        assert_eq!(
            PaletteConfig::default().status_display(),
            STATUS_DISPLAY_DURATION
        );
    }

    #[test]
    fn test_rejects_bad_hotkey() {
        let config = PaletteConfig {
            hotkey: "hyper+banana".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_history = \"many\"").unwrap();
        let err = PaletteConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
