//! Request handlers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use accrue_core::validation::{validate_params, validate_scenarios};
use accrue_core::Scenario;
use accrue_engine::{project, project_batch};

use crate::config::ServerConfig;

/// Message returned for unparseable or unexpected request payloads.
const GENERIC_ERROR: &str = "Failed to calculate investment";

/// Application state.
pub struct AppState {
    /// Server configuration (deployment guards).
    pub config: ServerConfig,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Error response with a single message.
#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Error response carrying one message per failing scenario.
#[derive(Serialize)]
pub struct ErrorsResponse {
    errors: Vec<String>,
}

fn bad_request(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(GENERIC_ERROR)),
    )
        .into_response()
}

/// Calculate a single scenario from query parameters.
///
/// Query values arrive as strings; absent parameters are treated as
/// non-numeric and fail coercion.
pub async fn get_calculate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let field = |key: &str| {
        query
            .get(key)
            .map_or(Value::Null, |s| Value::String(s.clone()))
    };

    let params = match validate_params(
        &field("months"),
        &field("initialAmount"),
        &field("monthlyContribution"),
        &field("annualInterestRate"),
    ) {
        Ok(params) => params,
        Err(e) => return bad_request(e.to_string()),
    };

    if let Err(response) = check_months_guard(&state.config, params.months) {
        return response;
    }

    (StatusCode::OK, Json(project(&params))).into_response()
}

/// Calculate one scenario or a batch, depending on the body shape.
///
/// A JSON array is a batch of id-tagged scenarios; a JSON object is a
/// single scenario (kept for backwards compatibility). Anything else,
/// including an unparseable body, is a generic internal error rather
/// than a validation error.
pub async fn post_calculate(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            debug!("rejecting unparseable calculate payload: {}", e);
            return internal_error();
        }
    };

    match payload {
        Value::Array(entries) => calculate_batch(&state.config, &entries),
        Value::Object(_) => calculate_single(&state.config, &payload),
        _ => internal_error(),
    }
}

fn calculate_single(config: &ServerConfig, body: &Value) -> Response {
    let field = |key: &str| body.get(key).unwrap_or(&Value::Null);

    let params = match validate_params(
        field("months"),
        field("initialAmount"),
        field("monthlyContribution"),
        field("annualInterestRate"),
    ) {
        Ok(params) => params,
        Err(e) => return bad_request(e.to_string()),
    };

    if let Err(response) = check_months_guard(config, params.months) {
        return response;
    }

    (StatusCode::OK, Json(project(&params))).into_response()
}

fn calculate_batch(config: &ServerConfig, entries: &[Value]) -> Response {
    if let Some(cap) = config.max_batch_scenarios {
        if entries.len() > cap {
            return bad_request(format!(
                "Batch exceeds the configured maximum of {} scenarios",
                cap
            ));
        }
    }

    let scenarios = match validate_scenarios(entries) {
        Ok(scenarios) => scenarios,
        Err(errors) => {
            // All-or-nothing: any failing scenario rejects the batch.
            let errors: Vec<String> = errors.iter().map(ToString::to_string).collect();
            return (StatusCode::BAD_REQUEST, Json(ErrorsResponse { errors })).into_response();
        }
    };

    if let Some(response) = scenarios
        .iter()
        .find_map(|s| check_scenario_months_guard(config, s))
    {
        return response;
    }

    (StatusCode::OK, Json(project_batch(&scenarios))).into_response()
}

fn check_months_guard(config: &ServerConfig, months: u32) -> Result<(), Response> {
    match config.max_months {
        Some(cap) if months > cap => Err(bad_request(format!(
            "Months cannot exceed the configured maximum of {}",
            cap
        ))),
        _ => Ok(()),
    }
}

fn check_scenario_months_guard(config: &ServerConfig, scenario: &Scenario) -> Option<Response> {
    let cap = config.max_months?;
    if scenario.params.months > cap {
        return Some(bad_request(format!(
            "Investment {}: months cannot exceed the configured maximum of {}",
            scenario.id, cap
        )));
    }
    None
}
