//! Batch projection.
//!
//! A batch is a sequence of independently identified scenarios; each is
//! projected in isolation and the results are keyed by scenario id.
//! Validation (including the all-or-nothing rejection policy) happens
//! upstream in `accrue_core::validation::validate_scenarios` — by the
//! time scenarios reach this module they are all valid.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use accrue_core::Scenario;

use crate::projection::{project, InvestmentResult};

/// Results for a batch of scenarios, keyed by scenario id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    /// One result per distinct id. Duplicate ids collapse to the last
    /// scenario supplied under that id.
    pub investments: HashMap<String, InvestmentResult>,
}

/// Projects every scenario in the batch.
///
/// Scenarios are computed independently in input order; there is no
/// cross-scenario state, so each entry equals what [`project`] would
/// return for that scenario alone. The output is keyed by id and carries
/// no ordering of its own.
pub fn project_batch(scenarios: &[Scenario]) -> BatchResult {
    debug!("projecting batch of {} scenario(s)", scenarios.len());

    let mut investments = HashMap::with_capacity(scenarios.len());
    for scenario in scenarios {
        investments.insert(scenario.id.clone(), project(&scenario.params));
    }

    BatchResult { investments }
}
