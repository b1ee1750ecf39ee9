//! # Accrue Engine
//!
//! Deterministic compound growth projections for the Accrue library.
//!
//! The engine is a total, pure function over validated
//! [`InvestmentParams`](accrue_core::InvestmentParams): given a valid
//! record it always produces an [`InvestmentResult`] and never fails.
//! Batches of independently identified scenarios are computed in
//! isolation from one another.
//!
//! ## Example
//!
//! ```rust
//! use accrue_core::InvestmentParams;
//! use accrue_engine::project;
//!
//! let result = project(&InvestmentParams::new(12, 10_000.0, 500.0, 7.0));
//!
//! // Month 1 reflects the contribution only; interest starts in month 2.
//! assert_eq!(result.monthly_data[0].value, 10_500.0);
//! assert_eq!(result.monthly_data[0].monthly_interest, 0.0);
//! assert_eq!(result.total_contributions, 16_000.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

pub mod batch;
pub mod projection;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::batch::{project_batch, BatchResult};
    pub use crate::projection::{monthly_rate, project, InvestmentResult, MonthlyDataPoint};
}

pub use batch::{project_batch, BatchResult};
pub use projection::{monthly_rate, project, InvestmentResult, MonthlyDataPoint};
