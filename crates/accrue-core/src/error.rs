//! Error types for the Accrue library.
//!
//! This module defines the error types used throughout Accrue,
//! providing structured error handling with context.
//!
//! Display strings are part of the wire contract: the server returns
//! them verbatim in error payloads, so they must stay stable.

use thiserror::Error;

/// A specialized Result type for Accrue validation operations.
pub type AccrueResult<T> = Result<T, ValidationError>;

/// A parameter record failed validation.
///
/// Checks run in declaration order and short-circuit: the first
/// violation found is the one reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more scalar inputs could not be coerced to a number.
    ///
    /// Reported once for the whole record, not per field.
    #[error("All parameters must be valid numbers")]
    NotNumeric,

    /// The period count is zero or negative.
    #[error("Months must be greater than 0")]
    NonPositiveMonths,

    /// The opening balance is negative.
    #[error("Initial amount cannot be negative")]
    NegativeInitialAmount,

    /// The per-period contribution is negative.
    #[error("Monthly contribution cannot be negative")]
    NegativeContribution,

    /// The annual interest rate is negative.
    #[error("Annual interest rate cannot be negative")]
    NegativeRate,

    /// The annual interest rate exceeds 100%.
    #[error("Annual interest rate cannot exceed 100%")]
    RateAboveCap,
}

/// A scenario inside a batch request was rejected.
///
/// Batch validation is all-or-nothing: every scenario error is collected
/// and the batch computes nothing if any scenario fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// The scenario at `index` has no usable id (missing, not a string,
    /// or empty).
    #[error("Investment at index {index} is missing an id")]
    MissingId {
        /// Zero-based position of the scenario in the request.
        index: usize,
    },

    /// The scenario's parameters failed validation.
    #[error("Investment {id}: {source}")]
    Invalid {
        /// Caller-supplied scenario identifier.
        id: String,
        /// The underlying parameter violation.
        source: ValidationError,
    },
}

impl ScenarioError {
    /// Creates a missing-id error for the scenario at `index`.
    #[must_use]
    pub fn missing_id(index: usize) -> Self {
        Self::MissingId { index }
    }

    /// Creates a scenario-scoped validation error.
    #[must_use]
    pub fn invalid(id: impl Into<String>, source: ValidationError) -> Self {
        Self::Invalid {
            id: id.into(),
            source,
        }
    }
}
