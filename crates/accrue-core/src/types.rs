//! Domain types for investment projections.

use serde::{Deserialize, Serialize};

/// A validated, immutable set of projection inputs.
///
/// Instances are only produced by
/// [`validate_params`](crate::validation::validate_params), so the
/// invariants below hold everywhere downstream:
///
/// - `months > 0`
/// - `initial_amount >= 0`
/// - `monthly_contribution >= 0`
/// - `annual_interest_rate` in `[0, 100]` (a percentage, 7 means 7%)
///
/// Field names serialize in camelCase to match the JSON wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentParams {
    /// Number of monthly compounding periods.
    pub months: u32,
    /// Account balance at period 0.
    pub initial_amount: f64,
    /// Amount added at every period.
    pub monthly_contribution: f64,
    /// Annual interest rate as a percentage in `[0, 100]`.
    pub annual_interest_rate: f64,
}

impl InvestmentParams {
    /// Creates a parameter record without validation.
    ///
    /// Intended for callers that already hold trusted values (tests,
    /// internal construction). Untrusted input must go through
    /// [`validate_params`](crate::validation::validate_params).
    #[must_use]
    pub fn new(
        months: u32,
        initial_amount: f64,
        monthly_contribution: f64,
        annual_interest_rate: f64,
    ) -> Self {
        Self {
            months,
            initial_amount,
            monthly_contribution,
            annual_interest_rate,
        }
    }
}

/// One independent projection, tagged with a caller-supplied identifier.
///
/// Ids are opaque non-empty strings. Uniqueness is not enforced; when a
/// batch contains duplicate ids the last scenario wins in the result
/// mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Caller-supplied identifier, non-empty.
    pub id: String,
    /// Validated projection inputs.
    #[serde(flatten)]
    pub params: InvestmentParams,
}

impl Scenario {
    /// Creates a scenario from an id and validated parameters.
    #[must_use]
    pub fn new(id: impl Into<String>, params: InvestmentParams) -> Self {
        Self {
            id: id.into(),
            params,
        }
    }
}
