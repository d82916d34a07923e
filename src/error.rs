//! Custom error types for cashflow-report
//!
//! Every failure in the pipeline surfaces as a [`ReportError`]. Nothing is
//! recovered locally: the run either produces a complete document or stops.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Pipeline stage an error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    Load,
    Render,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => write!(f, "config"),
            Self::Load => write!(f, "load"),
            Self::Render => write!(f, "render"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// The main error type for report generation
#[derive(Error, Debug)]
pub enum ReportError {
    /// The input file does not exist or cannot be opened
    #[error("Input not found: {path}: {reason}")]
    InputNotFound { path: PathBuf, reason: String },

    /// A row (or the header) failed schema/type validation
    #[error("Parse error at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// The output directory or file could not be written
    #[error("Output write error: {0}")]
    OutputWrite(String),

    /// Invalid runtime configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A total grew beyond the range of the decimal type
    #[error("Amount overflow: {0} is out of range")]
    Overflow(String),

    /// Document serialization failed
    #[error("Render error: {0}")]
    Render(String),
}

impl ReportError {
    /// Create an "input not found" error for a path
    pub fn input_not_found(path: impl AsRef<Path>, reason: impl fmt::Display) -> Self {
        Self::InputNotFound {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Create a parse error for a given input line
    pub fn parse(line: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create an overflow error naming the total that overflowed
    pub fn overflow(total: impl Into<String>) -> Self {
        Self::Overflow(total.into())
    }

    /// The pipeline stage this error belongs to
    pub fn stage(&self) -> Stage {
        match self {
            Self::Config(_) => Stage::Config,
            Self::InputNotFound { .. } | Self::Parse { .. } | Self::Overflow(_) => Stage::Load,
            Self::Render(_) => Stage::Render,
            Self::OutputWrite(_) => Stage::Write,
        }
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        Self::Parse {
            line,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Render(err.to_string())
    }
}

/// Result type alias for report operations
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReportError::Config("bad currency".into());
        assert_eq!(err.to_string(), "Configuration error: bad currency");
    }

    #[test]
    fn test_parse_error() {
        let err = ReportError::parse(3, "date: invalid '2024/13/40'");
        assert_eq!(
            err.to_string(),
            "Parse error at line 3: date: invalid '2024/13/40'"
        );
        assert!(err.is_parse());
        assert_eq!(err.stage(), Stage::Load);
    }

    #[test]
    fn test_input_not_found() {
        let err = ReportError::input_not_found("missing.csv", "No such file");
        assert_eq!(err.to_string(), "Input not found: missing.csv: No such file");
        assert_eq!(err.stage(), Stage::Load);
    }

    #[test]
    fn test_overflow_display() {
        assert_eq!(
            ReportError::overflow("total expense").to_string(),
            "Amount overflow: total expense is out of range"
        );
    }

    #[test]
    fn test_stages() {
        assert_eq!(ReportError::OutputWrite("x".into()).stage(), Stage::Write);
        assert_eq!(ReportError::Render("x".into()).stage(), Stage::Render);
        assert_eq!(ReportError::Config("x".into()).stage().to_string(), "config");
        assert_eq!(ReportError::overflow("total income").stage(), Stage::Load);
    }
}
