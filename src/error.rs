//! Error types for the Price Point Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation core itself never fails; every error here originates at
//! the request boundary or during server startup.

use thiserror::Error;

/// The main error type for the Price Point Engine.
///
/// Each variant carries its HTTP status and machine-readable code as data
/// (see [`crate::api`] for the mapping) rather than through subtype dispatch.
///
/// # Example
///
/// ```
/// use price_point_engine::error::EngineError;
///
/// let error = EngineError::missing_field("Price");
/// assert_eq!(error.to_string(), "\"Price\" is required");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The request body failed presence or primitive-type validation.
    ///
    /// Validation failures are terminal and reported immediately to the
    /// caller; they are never retried.
    #[error("{message}")]
    Validation {
        /// The first offending field, in declaration order.
        field: String,
        /// Human-readable message naming the field.
        message: String,
    },

    /// A requested resource does not exist.
    ///
    /// Unused by the calculation core (an unmatched route is the documented
    /// default-rate path, not a failure) but reserved for the boundary.
    #[error("{message}")]
    NotFound {
        /// A description of what was not found.
        message: String,
    },

    /// Anything unexpected: startup failures, serialization faults.
    #[error("{message}")]
    Server {
        /// A description of the failure.
        message: String,
    },
}

impl EngineError {
    /// Builds a validation error for a missing required field.
    ///
    /// The message format matches the schema-validation convention used by
    /// the form client: `"<FieldName>" is required`.
    pub fn missing_field(field: &str) -> Self {
        EngineError::Validation {
            field: field.to_string(),
            message: format!("\"{field}\" is required"),
        }
    }

    /// Builds a validation error for a field of the wrong primitive type.
    pub fn wrong_type(field: &str, expected: &str) -> Self {
        EngineError::Validation {
            field: field.to_string(),
            message: format!("\"{field}\" must be a {expected}"),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
