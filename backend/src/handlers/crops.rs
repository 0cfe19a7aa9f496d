//! HTTP handlers for crop catalog endpoints

use axum::Json;

use crate::error::AppResult;
use crate::models::CropParameters;
use crate::services::CropCatalog;

/// List all supported crops with their reference parameters
pub async fn list_crops() -> AppResult<Json<Vec<CropParameters>>> {
    let catalog = CropCatalog::new();
    Ok(Json(catalog.all().to_vec()))
}
