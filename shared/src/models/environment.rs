//! Synthetic weather data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of synthetic weather
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyEnvironmentRecord {
    pub date: NaiveDate,
    /// Air temperature in celsius
    pub temperature: f64,
    /// Relative humidity in percent, nominally within [0, 100]
    pub humidity: f64,
    /// Rainfall in millimetres, non-negative
    pub precipitation: f64,
    /// Solar radiation in watts per square metre, non-negative
    pub solar_radiation: f64,
}

/// Daily weather record over a date range
///
/// Invariant: one record per calendar day of the requested inclusive range,
/// ordered by date with no gaps or duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EnvironmentalSeries {
    /// Descriptive label of the simulated site, not used in computation
    pub location: String,
    pub records: Vec<DailyEnvironmentRecord>,
}

impl EnvironmentalSeries {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
