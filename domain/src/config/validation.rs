//! Structured configuration issues.
//!
//! Config loaders report problems as a list of [`ConfigIssue`]s rather than
//! failing on the first one; callers print warnings and abort on errors.

use std::fmt;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `assessment.strategy` is not a known scoring strategy.
    UnknownStrategy,
    /// `assessment.default_age` outside the accepted range.
    AgeOutOfRange,
    /// Neither `catalog.path` nor `catalog.url` is set.
    CatalogSourceMissing,
    /// Both `catalog.path` and `catalog.url` are set; the path wins.
    CatalogSourceAmbiguous,
    /// `catalog.url` set but the binary was built without remote catalogs.
    RemoteCatalogUnsupported,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}

/// True if any issue is fatal
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(ConfigIssue::is_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let e = ConfigIssue::error(ConfigIssueCode::CatalogSourceMissing, "no catalog");
        let w = ConfigIssue::warning(ConfigIssueCode::CatalogSourceAmbiguous, "both set");
        assert!(e.is_error());
        assert!(!w.is_error());
        assert_eq!(e.to_string(), "error: no catalog");
        assert_eq!(w.to_string(), "warning: both set");
    }

    #[test]
    fn test_has_errors() {
        assert!(!has_errors(&[]));
        assert!(!has_errors(&[ConfigIssue::warning(
            ConfigIssueCode::CatalogSourceAmbiguous,
            "x"
        )]));
        assert!(has_errors(&[ConfigIssue::error(
            ConfigIssueCode::AgeOutOfRange,
            "x"
        )]));
    }
}
