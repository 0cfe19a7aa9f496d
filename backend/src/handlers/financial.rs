//! HTTP handlers for financial derivation

use axum::Json;
use serde::Deserialize;
use shared::{FinancialSeries, ProductionSeries};

use crate::error::AppResult;
use crate::services::{request_rng, simulation::validate_farm_size, CropCatalog, FinancialModel};

/// Input for deriving daily financials from a production series
#[derive(Debug, Deserialize)]
pub struct ComputeFinancialsInput {
    pub production: ProductionSeries,
    /// Crop identifier, e.g. "wheat"
    pub crop: String,
    pub farm_size_ha: f64,
    /// Optional seed for reproducible cost noise
    pub seed: Option<u64>,
}

/// Derive daily revenue, costs and profit from a production series
pub async fn compute_financials(
    Json(input): Json<ComputeFinancialsInput>,
) -> AppResult<Json<FinancialSeries>> {
    validate_farm_size(input.farm_size_ha)?;

    let catalog = CropCatalog::new();
    let params = catalog.resolve(&input.crop)?;

    let model = FinancialModel::new(params.economics, input.farm_size_ha);
    let mut rng = request_rng(input.seed);
    Ok(Json(model.compute(&input.production, &mut rng)))
}
