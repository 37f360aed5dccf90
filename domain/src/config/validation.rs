//! Configuration issues detected when loading settings.
//!
//! Loading never fails on a questionable value; it falls back to a default
//! and reports a [`ConfigIssue`] so the front end can warn.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The setting cannot be honored at all.
    Error,
    /// The setting was adjusted or ignored.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A quota names a research area that does not exist
    UnknownCategory { value: String },
    /// A numeric limit is outside its usable range
    InvalidLimit { field: String, value: usize },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let w = ConfigIssue::warning(
            ConfigIssueCode::UnknownCategory {
                value: "pricing".into(),
            },
            "unknown",
        );
        assert!(!w.is_error());

        let e = ConfigIssue::error(
            ConfigIssueCode::InvalidLimit {
                field: "engine.capacity".into(),
                value: 0,
            },
            "zero",
        );
        assert!(e.is_error());
        assert_eq!(e.message, "zero");
    }
}
