//! Common types used across the platform

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar date range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of days covered, both endpoints included.
    ///
    /// A range whose end precedes its start covers zero days; that is a
    /// valid empty range, not an error.
    pub fn num_days(&self) -> usize {
        if self.end < self.start {
            return 0;
        }
        (self.end - self.start).num_days() as usize + 1
    }

    /// Iterate over every date in the range, in order.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let start = self.start;
        (0..self.num_days()).map(move |offset| start + chrono::Duration::days(offset as i64))
    }
}

/// Sampling cadence for generated series
///
/// Daily is the only cadence the simulator supports; the type exists so the
/// API carries an explicit cadence parameter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
}
