//! HTTP handlers for crop production simulation

use axum::Json;
use serde::{Deserialize, Serialize};
use shared::{EnvironmentalSeries, ProductionSeries};

use crate::error::AppResult;
use crate::services::{simulation::validate_farm_size, CropCatalog, ProductionSimulator};

/// Input for simulating production from a weather record
#[derive(Debug, Deserialize)]
pub struct SimulateProductionInput {
    pub environment: EnvironmentalSeries,
    /// Crop identifier, e.g. "wheat"
    pub crop: String,
    pub farm_size_ha: f64,
}

/// Production series with its running total, for the cumulative chart
#[derive(Debug, Serialize)]
pub struct ProductionResponse {
    pub series: ProductionSeries,
    pub cumulative_yield: Vec<f64>,
}

/// Simulate daily yield for a crop and farm size over a weather record
pub async fn simulate_production(
    Json(input): Json<SimulateProductionInput>,
) -> AppResult<Json<ProductionResponse>> {
    validate_farm_size(input.farm_size_ha)?;

    let catalog = CropCatalog::new();
    let params = catalog.resolve(&input.crop)?.clone();

    let series = ProductionSimulator::new(params, input.farm_size_ha).simulate(&input.environment);
    let cumulative_yield = series.cumulative_yield();

    Ok(Json(ProductionResponse {
        series,
        cumulative_yield,
    }))
}
