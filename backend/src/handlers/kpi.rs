//! HTTP handlers for KPI computation

use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::models::{FinancialSeries, KpiReport, ProductionSeries};
use crate::services::{simulation::validate_farm_size, trend, CropCatalog};

/// Input for computing the headline KPI report
#[derive(Debug, Deserialize)]
pub struct ComputeKpisInput {
    pub production: ProductionSeries,
    pub financial: FinancialSeries,
    /// Crop identifier, e.g. "wheat"
    pub crop: String,
    pub farm_size_ha: f64,
}

/// Compute totals, efficiency and week-over-week trends for one period
pub async fn compute_kpis(Json(input): Json<ComputeKpisInput>) -> AppResult<Json<KpiReport>> {
    validate_farm_size(input.farm_size_ha)?;

    let catalog = CropCatalog::new();
    let params = catalog.resolve(&input.crop)?;

    Ok(Json(trend::compute_kpis(
        &input.production,
        &input.financial,
        params,
        input.farm_size_ha,
    )))
}
