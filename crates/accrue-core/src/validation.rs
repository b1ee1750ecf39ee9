//! Parameter validation.
//!
//! Untrusted input reaches the projection engine exactly once, through
//! this module. Scalars arrive as [`serde_json::Value`] (the server
//! forwards query strings and JSON body fields as-is), are coerced to
//! numbers, and are checked against the domain invariants in a fixed
//! order with short-circuit semantics: the first violation wins.
//!
//! Everything here is a pure function of its inputs.

use serde_json::Value;

use crate::error::{AccrueResult, ScenarioError, ValidationError};
use crate::types::{InvestmentParams, Scenario};

static NULL: Value = Value::Null;

/// Coerces a JSON scalar to a finite `f64`.
///
/// Numbers pass through; strings are trimmed and parsed (an empty or
/// blank string is rejected). Booleans, nulls, arrays, and objects never
/// coerce, and neither do NaN or infinities.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    }
}

/// Validates and coerces the four projection inputs.
///
/// Coercion failure on any field is reported once as
/// [`ValidationError::NotNumeric`], covering all fields. The domain
/// checks then run in order (months, initial amount, contribution, rate
/// floor, rate cap) and return at the first failure.
///
/// On success the coerced magnitudes are returned unchanged, except that
/// `months` is truncated to a whole period count; a fractional count
/// that truncates to zero is rejected like any other non-positive value.
pub fn validate_params(
    months: &Value,
    initial_amount: &Value,
    monthly_contribution: &Value,
    annual_interest_rate: &Value,
) -> AccrueResult<InvestmentParams> {
    let (Some(months), Some(initial_amount), Some(monthly_contribution), Some(rate)) = (
        coerce_number(months),
        coerce_number(initial_amount),
        coerce_number(monthly_contribution),
        coerce_number(annual_interest_rate),
    ) else {
        return Err(ValidationError::NotNumeric);
    };

    if months <= 0.0 {
        return Err(ValidationError::NonPositiveMonths);
    }
    if initial_amount < 0.0 {
        return Err(ValidationError::NegativeInitialAmount);
    }
    if monthly_contribution < 0.0 {
        return Err(ValidationError::NegativeContribution);
    }
    if rate < 0.0 {
        return Err(ValidationError::NegativeRate);
    }
    if rate > 100.0 {
        return Err(ValidationError::RateAboveCap);
    }

    // Guard the engine against fractional period counts.
    let months = months.trunc() as u32;
    if months == 0 {
        return Err(ValidationError::NonPositiveMonths);
    }

    Ok(InvestmentParams {
        months,
        initial_amount,
        monthly_contribution,
        annual_interest_rate: rate,
    })
}

/// Validates a batch of raw scenario objects.
///
/// Each element needs a non-empty string `id` plus the four scalar
/// fields. Validation is all-or-nothing: every failing scenario
/// contributes one [`ScenarioError`], and if any scenario fails the
/// whole batch is rejected with the collected errors and nothing is
/// computed.
pub fn validate_scenarios(raw: &[Value]) -> Result<Vec<Scenario>, Vec<ScenarioError>> {
    let mut scenarios = Vec::with_capacity(raw.len());
    let mut errors = Vec::new();

    for (index, entry) in raw.iter().enumerate() {
        let id = entry
            .get("id")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|id| !id.is_empty());

        let Some(id) = id else {
            errors.push(ScenarioError::missing_id(index));
            continue;
        };

        match validate_params(
            field(entry, "months"),
            field(entry, "initialAmount"),
            field(entry, "monthlyContribution"),
            field(entry, "annualInterestRate"),
        ) {
            Ok(params) => scenarios.push(Scenario::new(id, params)),
            Err(e) => errors.push(ScenarioError::invalid(id, e)),
        }
    }

    if errors.is_empty() {
        Ok(scenarios)
    } else {
        Err(errors)
    }
}

fn field<'a>(entry: &'a Value, key: &str) -> &'a Value {
    entry.get(key).unwrap_or(&NULL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_params_pass_through_unchanged() {
        let params =
            validate_params(&json!(12), &json!(10_000), &json!(500), &json!(7)).unwrap();

        assert_eq!(params.months, 12);
        assert_eq!(params.initial_amount, 10_000.0);
        assert_eq!(params.monthly_contribution, 500.0);
        assert_eq!(params.annual_interest_rate, 7.0);
    }

    #[test]
    fn test_string_inputs_coerce() {
        let params =
            validate_params(&json!("12"), &json!(" 10000 "), &json!("500.5"), &json!("7"))
                .unwrap();

        assert_eq!(params.months, 12);
        assert_eq!(params.monthly_contribution, 500.5);
    }

    #[test]
    fn test_non_numeric_input_is_one_combined_error() {
        for bad in [json!("abc"), json!(true), json!(null), json!([1]), json!({})] {
            let err = validate_params(&json!(12), &bad, &json!(500), &json!(7)).unwrap_err();
            assert_eq!(err, ValidationError::NotNumeric);
        }
    }

    #[test]
    fn test_empty_string_does_not_coerce() {
        assert_eq!(coerce_number(&json!("")), None);
        assert_eq!(coerce_number(&json!("   ")), None);
    }

    #[test]
    fn test_checks_short_circuit_in_order() {
        // Months and initial amount both invalid: the months error wins.
        let err = validate_params(&json!(-1), &json!(-1), &json!(500), &json!(7)).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveMonths);

        // Initial amount and rate both invalid: initial amount wins.
        let err = validate_params(&json!(12), &json!(-1), &json!(500), &json!(-5)).unwrap_err();
        assert_eq!(err, ValidationError::NegativeInitialAmount);
    }

    #[test]
    fn test_rate_bounds() {
        let err = validate_params(&json!(12), &json!(0), &json!(0), &json!(150)).unwrap_err();
        assert_eq!(err.to_string(), "Annual interest rate cannot exceed 100%");

        // Both endpoints are valid.
        assert!(validate_params(&json!(12), &json!(0), &json!(0), &json!(0)).is_ok());
        assert!(validate_params(&json!(12), &json!(0), &json!(0), &json!(100)).is_ok());
    }

    #[test]
    fn test_fractional_months_truncate() {
        let params = validate_params(&json!(2.9), &json!(0), &json!(0), &json!(0)).unwrap();
        assert_eq!(params.months, 2);

        let err = validate_params(&json!(0.5), &json!(0), &json!(0), &json!(0)).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveMonths);
    }

    #[test]
    fn test_scenarios_all_valid() {
        let raw = vec![
            json!({"id": "a", "months": 12, "initialAmount": 1000, "monthlyContribution": 50, "annualInterestRate": 5}),
            json!({"id": "b", "months": 6, "initialAmount": 0, "monthlyContribution": 100, "annualInterestRate": 0}),
        ];

        let scenarios = validate_scenarios(&raw).unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].id, "a");
        assert_eq!(scenarios[1].params.months, 6);
    }

    #[test]
    fn test_missing_id_reported_by_index() {
        let raw = vec![
            json!({"id": "a", "months": 12, "initialAmount": 1000, "monthlyContribution": 50, "annualInterestRate": 5}),
            json!({"months": 6, "initialAmount": 0, "monthlyContribution": 100, "annualInterestRate": 0}),
        ];

        let errors = validate_scenarios(&raw).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "Investment at index 1 is missing an id"
        );
    }

    #[test]
    fn test_empty_id_counts_as_missing() {
        let raw = vec![json!({"id": "  ", "months": 1, "initialAmount": 0, "monthlyContribution": 0, "annualInterestRate": 0})];
        let errors = validate_scenarios(&raw).unwrap_err();
        assert_eq!(errors[0], ScenarioError::missing_id(0));
    }

    #[test]
    fn test_batch_is_all_or_nothing() {
        let raw = vec![
            json!({"id": "good", "months": 12, "initialAmount": 1000, "monthlyContribution": 50, "annualInterestRate": 5}),
            json!({"id": "bad", "months": 12, "initialAmount": 1000, "monthlyContribution": 50, "annualInterestRate": 150}),
        ];

        // The valid scenario is not returned alongside the error.
        let errors = validate_scenarios(&raw).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "Investment bad: Annual interest rate cannot exceed 100%"
        );
    }

    #[test]
    fn test_scenario_errors_collect_across_the_batch() {
        let raw = vec![
            json!({"months": 1, "initialAmount": 0, "monthlyContribution": 0, "annualInterestRate": 0}),
            json!({"id": "b", "months": -3, "initialAmount": 0, "monthlyContribution": 0, "annualInterestRate": 0}),
            json!({"id": "c", "months": 1, "initialAmount": 0, "monthlyContribution": "x", "annualInterestRate": 0}),
        ];

        let errors = validate_scenarios(&raw).unwrap_err();
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "Investment at index 0 is missing an id",
                "Investment b: Months must be greater than 0",
                "Investment c: All parameters must be valid numbers",
            ]
        );
    }
}
