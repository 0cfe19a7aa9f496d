//! HTTP handlers for synthetic weather generation

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::{DateRange, EnvironmentalSeries, Frequency};

use crate::error::AppResult;
use crate::services::{request_rng, EnvironmentGenerator};
use crate::AppState;

/// Input for generating an environmental series
#[derive(Debug, Deserialize)]
pub struct GenerateEnvironmentInput {
    /// Descriptive site label; defaults to the configured location
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub frequency: Frequency,
    /// Optional seed for reproducible output
    pub seed: Option<u64>,
}

/// Generate a synthetic daily weather record for a date range
///
/// An end date before the start date yields an empty series.
pub async fn generate_environment(
    State(state): State<AppState>,
    Json(input): Json<GenerateEnvironmentInput>,
) -> AppResult<Json<EnvironmentalSeries>> {
    let location = input
        .location
        .unwrap_or_else(|| state.config.simulation.default_location.clone());

    let generator = EnvironmentGenerator::new(
        location,
        DateRange::new(input.start_date, input.end_date),
    )
    .with_frequency(input.frequency);

    let mut rng = request_rng(input.seed);
    Ok(Json(generator.generate(&mut rng)))
}
