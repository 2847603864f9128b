use std::fmt;

/// One submitted command. Always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandEntry(String);

impl CommandEntry {
    /// Trims `text` and returns `None` when nothing is left.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CommandEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CommandEntry {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CommandEntry {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// What a backend reports back for a command it accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub command: String,
    pub output: Option<String>,
}
