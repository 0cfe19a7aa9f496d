//! HTTP handlers for the end-to-end simulation pipeline

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{DateRange, EnvironmentalSeries, FinancialSeries, ForecastTable, KpiReport, ProductionSeries};

use crate::error::AppResult;
use crate::services::{request_rng, SimulationService};
use crate::AppState;

/// Input for one full pipeline run
#[derive(Debug, Deserialize)]
pub struct RunSimulationInput {
    /// Descriptive site label; defaults to the configured location
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Crop identifier, e.g. "wheat"
    pub crop: String,
    /// Defaults to the configured farm size
    pub farm_size_ha: Option<f64>,
    /// Optional seed for reproducible output
    pub seed: Option<u64>,
}

/// Everything the dashboard needs for one parameter selection
#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    pub environment: EnvironmentalSeries,
    pub production: ProductionSeries,
    pub cumulative_yield: Vec<f64>,
    pub financial: FinancialSeries,
    pub kpis: KpiReport,
    pub forecast: ForecastTable,
}

/// Run the full pipeline: weather, production, financials, KPIs, forecast
pub async fn run_simulation(
    State(state): State<AppState>,
    Json(input): Json<RunSimulationInput>,
) -> AppResult<Json<SimulationResponse>> {
    let location = input
        .location
        .unwrap_or_else(|| state.config.simulation.default_location.clone());
    let farm_size_ha = input
        .farm_size_ha
        .unwrap_or(state.config.simulation.default_farm_size_ha);

    let service = SimulationService::new();
    let mut rng = request_rng(input.seed);
    let outcome = service.run(
        &location,
        DateRange::new(input.start_date, input.end_date),
        &input.crop,
        farm_size_ha,
        &mut rng,
    )?;

    Ok(Json(SimulationResponse {
        environment: outcome.environment,
        production: outcome.production,
        cumulative_yield: outcome.cumulative_yield,
        financial: outcome.financial,
        kpis: outcome.kpis,
        forecast: outcome.forecast,
    }))
}
