//! Error types for the shift payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll calculation.

use thiserror::Error;

/// The main error type for the shift payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shiftpay_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     value: "25:99".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid clock time '25:99': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A non-empty clock time could not be parsed as `HH:MM`.
    #[error("Invalid clock time '{value}': expected HH:MM")]
    InvalidTimeFormat {
        /// The value that failed to parse.
        value: String,
    },

    /// Range aggregation was asked for a mode it does not know.
    #[error("Unknown calculation mode: {mode}")]
    InvalidMode {
        /// The mode string that was not recognized.
        mode: String,
    },

    /// Attendance data file was not found at the specified path.
    #[error("Attendance data not found: {path}")]
    StoreNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Attendance data file could not be parsed.
    #[error("Failed to parse attendance data '{path}': {message}")]
    StoreParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A process configuration value was malformed.
    #[error("Invalid configuration value '{name}': {message}")]
    InvalidConfig {
        /// The configuration variable that was invalid.
        name: String,
        /// A description of what made the value invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
