//! HTTP handlers for scenario forecasting

use axum::Json;
use serde::Deserialize;
use shared::{FinancialSeries, ForecastTable, ProductionSeries};

use crate::error::AppResult;
use crate::services::forecast;

/// Input for projecting the scenario table
#[derive(Debug, Deserialize)]
pub struct ComputeForecastInput {
    pub production: ProductionSeries,
    pub financial: FinancialSeries,
}

/// Project pessimistic/neutral/optimistic scenarios from period means
pub async fn compute_forecast(
    Json(input): Json<ComputeForecastInput>,
) -> AppResult<Json<ForecastTable>> {
    Ok(Json(forecast::project(&input.production, &input.financial)))
}
