//! Financial outcome models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of revenue, costs and profit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyFinancialRecord {
    pub date: NaiveDate,
    /// Sale revenue for the day, non-negative
    pub revenue: f64,
    /// Daily share of the period cost with sampled noise, non-negative
    pub costs: f64,
    /// revenue - costs, may be negative
    pub profit: f64,
}

/// Daily financial record over a simulated period
///
/// Carries the smooth total period cost alongside the noisy daily records so
/// downstream ROI computation does not have to re-derive it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FinancialSeries {
    pub records: Vec<DailyFinancialRecord>,
    /// Fixed business cost + land rent + scale-adjusted variable cost
    pub total_period_cost: f64,
}

impl FinancialSeries {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_costs(&self) -> f64 {
        self.records.iter().map(|r| r.costs).sum()
    }

    pub fn total_profit(&self) -> f64 {
        self.records.iter().map(|r| r.profit).sum()
    }
}
