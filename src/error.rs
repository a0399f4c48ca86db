//! Error types for payroll records.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while validating, parsing, storing or
//! reading employee records.

use thiserror::Error;

/// The main error type for payroll records.
///
/// Validation and parse errors are recoverable where they occur (re-prompt,
/// skip an input line). I/O and corruption errors end the current operation.
/// Reaching the end of a data file is not an error: readers return `None`.
///
/// # Example
///
/// ```
/// use payroll_records::error::PayrollError;
///
/// let error = PayrollError::InvalidValue {
///     kind: "sex",
///     input: "X".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid sex value: 'X'");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// An employee field failed validation.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: &'static str,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Free-text input matched no known alias of an enumeration.
    #[error("Invalid {kind} value: '{input}'")]
    InvalidValue {
        /// The enumeration being parsed (e.g., "province").
        kind: &'static str,
        /// The input as given by the user.
        input: String,
    },

    /// A stored code matched no variant of an enumeration.
    #[error("Unknown {kind} code: {code}")]
    UnknownCode {
        /// The enumeration being decoded.
        kind: &'static str,
        /// The offending code, rendered for display.
        code: String,
    },

    /// A record in the data file was truncated or undecodable.
    #[error("Corrupt record: {message}")]
    CorruptRecord {
        /// A description of the corruption.
        message: String,
    },

    /// The data file could not be opened.
    #[error("Data file '{path}': {source}")]
    DataFile {
        /// The path of the data file.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred on an open stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl PayrollError {
    /// Builds an [`PayrollError::InvalidEmployee`] for `field`.
    pub(crate) fn invalid_employee(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidEmployee {
            field,
            message: message.into(),
        }
    }

    /// Builds a [`PayrollError::CorruptRecord`].
    pub(crate) fn corrupt(message: impl Into<String>) -> Self {
        Self::CorruptRecord {
            message: message.into(),
        }
    }

    /// Returns true for errors a caller may recover from by asking again
    /// or skipping the offending input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidEmployee { .. } | Self::InvalidValue { .. }
        )
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
