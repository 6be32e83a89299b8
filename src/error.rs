//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while recording badge events
//! and building time reports.
//!
//! Unpaired or out-of-order badge events are NOT errors: they are reported
//! through the orphan list of a [`PairingResult`](crate::calculation::PairingResult).

use thiserror::Error;

/// The main error type for the attendance engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     id: "emp_404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found with id emp_404");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A request carried a value that could not be parsed or validated.
    #[error("Invalid {field}: {message}")]
    InvalidInput {
        /// The offending field (e.g. "date", "month", "employee_id").
        field: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// The referenced employee does not exist in the directory.
    #[error("Employee not found with id {id}")]
    EmployeeNotFound {
        /// The employee id that was looked up.
        id: String,
    },

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

    /// The employee directory or event store failed.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage fault.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
