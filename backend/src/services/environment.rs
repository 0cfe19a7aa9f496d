//! Synthetic weather generation service
//!
//! Draws each variable independently per day: temperature from a per-month
//! normal distribution over a temperate seasonal cycle, humidity and solar
//! radiation from uniform ranges, precipitation from an exponential
//! distribution. No autocorrelation or cross-variable correlation is
//! modelled; that simplification is intentional.

use chrono::Datelike;
use rand::Rng;
use rand_distr::{Distribution, Exp, Normal};
use shared::{DailyEnvironmentRecord, DateRange, EnvironmentalSeries, Frequency};

/// Per-month (mean, stddev) temperature parameters in celsius.
/// Month 1 is the coldest (~5 C), month 7 the warmest (~28 C).
const MONTHLY_TEMPERATURE: [(f64, f64); 12] = [
    (5.0, 3.0),
    (7.0, 3.0),
    (10.0, 4.0),
    (15.0, 5.0),
    (20.0, 5.0),
    (25.0, 4.0),
    (28.0, 3.0),
    (27.0, 3.0),
    (22.0, 4.0),
    (17.0, 5.0),
    (10.0, 4.0),
    (6.0, 3.0),
];

const HUMIDITY_RANGE: (f64, f64) = (40.0, 90.0);
const SOLAR_RADIATION_RANGE: (f64, f64) = (100.0, 300.0);
/// Mean daily rainfall in millimetres
const PRECIPITATION_MEAN_MM: f64 = 2.0;

/// Generates a synthetic daily weather record for a date range
#[derive(Debug, Clone)]
pub struct EnvironmentGenerator {
    location: String,
    range: DateRange,
    frequency: Frequency,
}

impl EnvironmentGenerator {
    pub fn new(location: impl Into<String>, range: DateRange) -> Self {
        Self {
            location: location.into(),
            range,
            frequency: Frequency::Daily,
        }
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Generate one record per calendar day of the inclusive range.
    ///
    /// An inverted range produces an empty series, not an error.
    pub fn generate(&self, rng: &mut impl Rng) -> EnvironmentalSeries {
        let Frequency::Daily = self.frequency;

        let exp = Exp::new(1.0 / PRECIPITATION_MEAN_MM).unwrap_or_else(|_| Exp::new(1.0).unwrap());

        let records = self
            .range
            .iter_days()
            .map(|date| {
                let (mean, stddev) = MONTHLY_TEMPERATURE[date.month0() as usize];
                let normal =
                    Normal::new(mean, stddev).unwrap_or_else(|_| Normal::new(mean, 1.0).unwrap());

                DailyEnvironmentRecord {
                    date,
                    temperature: normal.sample(rng),
                    humidity: rng.gen_range(HUMIDITY_RANGE.0..=HUMIDITY_RANGE.1),
                    precipitation: exp.sample(rng),
                    solar_radiation: rng
                        .gen_range(SOLAR_RADIATION_RANGE.0..=SOLAR_RADIATION_RANGE.1),
                }
            })
            .collect();

        EnvironmentalSeries {
            location: self.location.clone(),
            records,
        }
    }
}
