//! Scenario forecast models

use serde::{Deserialize, Serialize};

/// Forecast scenario label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Pessimistic,
    Neutral,
    Optimistic,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Pessimistic, Scenario::Neutral, Scenario::Optimistic];
}

/// Metric projected by the forecast
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMetric {
    Yield,
    Profit,
    Costs,
    Roi,
}

/// One row of the scenario forecast table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastEntry {
    pub scenario: Scenario,
    pub metric: ForecastMetric,
    pub value: f64,
}

/// Flat scenario table suitable for direct tabular rendering
///
/// Always 12 rows: 3 scenarios x {yield, profit, costs, roi}.
pub type ForecastTable = Vec<ForecastEntry>;
