//! Crop production models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of simulated crop production
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyProductionRecord {
    pub date: NaiveDate,
    /// Temperature suitability in [0, 1]
    pub temp_factor: f64,
    /// Water availability in [0, 1]
    pub water_factor: f64,
    /// Combined suitability, temp_factor * water_factor
    pub growth_factor: f64,
    /// Whole-farm yield for the day in tons, non-negative
    pub yield_tons: f64,
}

/// Daily production record over a simulated period
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductionSeries {
    pub records: Vec<DailyProductionRecord>,
}

impl ProductionSeries {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total yield over the period in tons
    pub fn total_yield(&self) -> f64 {
        self.records.iter().map(|r| r.yield_tons).sum()
    }

    /// Daily yields with a running cumulative total, for charting
    pub fn cumulative_yield(&self) -> Vec<f64> {
        let mut total = 0.0;
        self.records
            .iter()
            .map(|r| {
                total += r.yield_tons;
                total
            })
            .collect()
    }
}
