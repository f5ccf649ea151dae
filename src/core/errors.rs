//! Error types for the rulescout library.
//!
//! This module provides structured error handling for every rulescout
//! operation, preserving the context a user needs to diagnose a bad run:
//! the offending table line, the unexpected boolean token, the exit status
//! of the external command.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main result type for rulescout operations.
pub type Result<T> = std::result::Result<T, RulescoutError>;

/// Comprehensive error type for all rulescout operations.
#[derive(Error, Debug)]
pub enum RulescoutError {
    /// I/O related errors (file operations, process spawning)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors (unreadable or malformed `.swiftlint.yml`)
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// The supplied project path does not exist or is not a directory
    #[error("Invalid directory: {}", path.display())]
    InvalidDirectory {
        /// The offending path
        path: PathBuf,
    },

    /// Table structure errors from the rule-listing output.
    ///
    /// The offending line is carried verbatim: a row that fails the arity
    /// check means the format assumptions no longer hold, and the raw text
    /// is the only useful diagnostic.
    #[error("Table parse error: {message}\nOffending line was:\n  {line}")]
    Table {
        /// Error description
        message: String,
        /// The raw input line that failed to parse
        line: String,
    },

    /// Validation errors for input tokens
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Expected value or format
        expected: Option<String>,
        /// Actual value received
        actual: Option<String>,
    },

    /// External command failures (spawn errors surface as `Io`)
    #[error("Command error: {message}")]
    Command {
        /// Error description
        message: String,
        /// Exit status code, if the process ran at all
        status: Option<i32>,
    },
}

impl RulescoutError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new invalid-directory error
    pub fn invalid_directory(path: impl Into<PathBuf>) -> Self {
        Self::InvalidDirectory { path: path.into() }
    }

    /// Create a new table parse error carrying the offending line verbatim
    pub fn table(message: impl Into<String>, line: impl Into<String>) -> Self {
        Self::Table {
            message: message.into(),
            line: line.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Create a new validation error recording expected and actual values
    pub fn validation_mismatch(
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::Validation {
            message: message.into(),
            expected: Some(expected.into()),
            actual: Some(actual.into()),
        }
    }

    /// Create a new external-command error
    pub fn command(message: impl Into<String>, status: Option<i32>) -> Self {
        Self::Command {
            message: message.into(),
            status,
        }
    }
}

// Implement From traits for common error types
impl From<io::Error> for RulescoutError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_yaml::Error> for RulescoutError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::config(format!("YAML parsing failed: {err}"))
    }
}
