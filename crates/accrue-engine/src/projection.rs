//! Single-scenario projection.
//!
//! The projection walks the account month by month: each period applies
//! the contribution and, from the second period onward, interest on the
//! opening balance. The first period earns no interest, modeling a
//! contribution-then-idle-then-interest cadence where month 1 only
//! reflects the contribution.

use serde::{Deserialize, Serialize};

use accrue_core::InvestmentParams;

/// The account state after one compounding period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyDataPoint {
    /// 1-indexed period number.
    pub month: u32,
    /// Running balance after this period's interest and contribution.
    pub value: f64,
    /// Interest credited this period (zero for month 1).
    pub monthly_interest: f64,
    /// Contribution applied this period (constant across the series,
    /// carried for traceability).
    pub contribution: f64,
}

/// The full projection for one scenario.
///
/// Accounting identities, up to f64 epsilon:
///
/// - `total_value == total_contributions + total_interest`
/// - `total_value == normal_return + total_gain`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentResult {
    /// Month-by-month series, ordered by month ascending, one entry per
    /// period.
    pub monthly_data: Vec<MonthlyDataPoint>,
    /// Final balance after the last period.
    pub total_value: f64,
    /// Principal-only baseline: initial amount plus all contributions,
    /// with no compounding. Same value as `total_contributions`, kept as
    /// a distinct field for the caller's growth vs. no-growth comparison.
    pub normal_return: f64,
    /// Compounding benefit over the principal-only baseline.
    pub total_gain: f64,
    /// Initial amount plus all contributions.
    pub total_contributions: f64,
    /// Interest earned over the whole horizon.
    pub total_interest: f64,
}

/// Converts an annual percentage rate (7 means 7%) to a per-month rate.
pub fn monthly_rate(annual_interest_rate: f64) -> f64 {
    annual_interest_rate / 100.0 / 12.0
}

/// Projects a single scenario.
///
/// Precondition: `params` passed validation; the engine does not
/// re-check. Given valid input this is a total function with no failure
/// path and no side effects, so identical inputs yield bit-identical
/// results.
pub fn project(params: &InvestmentParams) -> InvestmentResult {
    let rate = monthly_rate(params.annual_interest_rate);

    let mut balance = params.initial_amount;
    let mut monthly_data = Vec::with_capacity(params.months as usize);

    for i in 0..params.months {
        let interest = if i > 0 { balance * rate } else { 0.0 };
        balance += params.monthly_contribution + interest;

        monthly_data.push(MonthlyDataPoint {
            month: i + 1,
            value: balance,
            monthly_interest: interest,
            contribution: params.monthly_contribution,
        });
    }

    let total_contributions =
        params.initial_amount + f64::from(params.months) * params.monthly_contribution;
    let normal_return = total_contributions;

    InvestmentResult {
        monthly_data,
        total_value: balance,
        normal_return,
        total_gain: balance - normal_return,
        total_contributions,
        total_interest: balance - total_contributions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn example_params() -> InvestmentParams {
        InvestmentParams::new(12, 10_000.0, 500.0, 7.0)
    }

    #[test]
    fn test_first_month_is_contribution_only() {
        let result = project(&example_params());

        assert_eq!(result.monthly_data[0].month, 1);
        assert_eq!(result.monthly_data[0].value, 10_500.0);
        assert_eq!(result.monthly_data[0].monthly_interest, 0.0);
        assert_eq!(result.monthly_data[0].contribution, 500.0);
    }

    #[test]
    fn test_second_month_credits_interest_on_opening_balance() {
        let result = project(&example_params());

        let expected_interest = 10_500.0 * (7.0 / 100.0 / 12.0);
        assert_relative_eq!(
            result.monthly_data[1].monthly_interest,
            expected_interest,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            result.monthly_data[1].value,
            10_500.0 + 500.0 + expected_interest,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_series_shape() {
        let result = project(&example_params());

        assert_eq!(result.monthly_data.len(), 12);
        for (k, point) in result.monthly_data.iter().enumerate() {
            assert_eq!(point.month, k as u32 + 1);
        }
    }

    #[test]
    fn test_summary_identities() {
        let result = project(&example_params());

        assert_eq!(result.total_contributions, 16_000.0);
        assert_eq!(result.normal_return, 16_000.0);
        assert!(result.total_interest > 0.0);
        assert_relative_eq!(
            result.total_value,
            result.total_contributions + result.total_interest,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            result.total_value,
            result.normal_return + result.total_gain,
            epsilon = 1e-9
        );
        assert_eq!(
            result.total_value,
            result.monthly_data.last().unwrap().value
        );
    }

    #[test]
    fn test_zero_rate_degrades_to_contributions_only() {
        let result = project(&InvestmentParams::new(24, 1_000.0, 100.0, 0.0));

        assert_eq!(result.total_value, 1_000.0 + 24.0 * 100.0);
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.total_gain, 0.0);
        assert!(result
            .monthly_data
            .iter()
            .all(|p| p.monthly_interest == 0.0));
    }

    #[test]
    fn test_zero_contribution_compounds_the_opening_balance() {
        let result = project(&InvestmentParams::new(3, 1_200.0, 0.0, 12.0));

        // 1% per month, first month idle.
        assert_eq!(result.monthly_data[0].value, 1_200.0);
        assert_relative_eq!(result.monthly_data[1].value, 1_212.0, epsilon = 1e-9);
        assert_relative_eq!(result.monthly_data[2].value, 1_224.12, epsilon = 1e-9);
        assert_eq!(result.total_contributions, 1_200.0);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let params = example_params();
        let a = project(&params);
        let b = project(&params);
        assert_eq!(a, b);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = project(&InvestmentParams::new(1, 0.0, 50.0, 0.0));
        let json = serde_json::to_value(&result).unwrap();

        assert!(json["monthlyData"].is_array());
        assert_eq!(json["totalValue"], 50.0);
        assert_eq!(json["normalReturn"], 50.0);
        assert_eq!(json["totalGain"], 0.0);
        assert_eq!(json["totalContributions"], 50.0);
        assert_eq!(json["totalInterest"], 0.0);
        assert_eq!(json["monthlyData"][0]["monthlyInterest"], 0.0);
    }
}
