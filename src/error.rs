//! Error types for the Shift Costing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The engine itself never fails hard for malformed-but-plausible business
//! input: these errors are raised at the input-validation boundary and are
//! converted by the engine into the soft `error` field of a result.

use thiserror::Error;

/// The main error type for the Shift Costing Engine.
///
/// # Example
///
/// ```
/// use shiftcost::error::EngineError;
///
/// let error = EngineError::MissingField {
///     field: "start_time".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing required field: start_time");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required input field was absent from the shift input.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// The shift duration was zero or negative.
    #[error("Shift duration must be positive, got {hours} hours")]
    NonPositiveDuration {
        /// The duration that was supplied.
        hours: String,
    },

    /// A penalty category key string did not match any canonical category.
    #[error("Unknown penalty category key: {key}")]
    UnknownCategory {
        /// The key string that failed to parse.
        key: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
