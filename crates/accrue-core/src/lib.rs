//! # Accrue Core
//!
//! Core types, error taxonomy, and parameter validation for the Accrue
//! compound growth projection library.
//!
//! This crate provides the foundational building blocks used throughout Accrue:
//!
//! - **Types**: The validated [`InvestmentParams`](types::InvestmentParams)
//!   record and the id-tagged [`Scenario`](types::Scenario) wrapper
//! - **Validation**: Coercion of untrusted scalar input into validated
//!   parameter records, with an ordered, short-circuiting check list
//! - **Errors**: Structured, recoverable validation errors with
//!   wire-stable messages
//!
//! ## Design Philosophy
//!
//! - **Validate at the boundary**: untrusted input crosses into the typed
//!   domain exactly once; downstream code never re-validates
//! - **Errors as data**: every rejection is a value returned to the
//!   caller, never a panic
//! - **Explicit over implicit**: field-named error messages, ordered checks
//!
//! ## Example
//!
//! ```rust
//! use accrue_core::validation::validate_params;
//! use serde_json::json;
//!
//! let params = validate_params(
//!     &json!(12),
//!     &json!(10000),
//!     &json!("500"),
//!     &json!(7),
//! )
//! .unwrap();
//!
//! assert_eq!(params.months, 12);
//! assert_eq!(params.monthly_contribution, 500.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{AccrueResult, ScenarioError, ValidationError};
    pub use crate::types::{InvestmentParams, Scenario};
    pub use crate::validation::{coerce_number, validate_params, validate_scenarios};
}

pub use error::{AccrueResult, ScenarioError, ValidationError};
pub use types::{InvestmentParams, Scenario};
