//! Summary indicator models

use serde::{Deserialize, Serialize};

/// Headline indicators for one simulated period
///
/// Trends are week-over-week percentage changes between the last two 7-day
/// windows; they are 0 when fewer than 14 daily records exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct KpiReport {
    /// Total yield over the period in tons
    pub total_yield_tons: f64,
    /// Total yield as a percentage of the theoretical maximum
    pub efficiency_pct: f64,
    pub total_costs: f64,
    pub total_profit: f64,
    pub yield_trend_pct: f64,
    pub efficiency_trend_pct: f64,
    pub cost_trend_pct: f64,
    pub profit_trend_pct: f64,
}
