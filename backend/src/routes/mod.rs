//! Route definitions for the Farm Simulation Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Crop catalog
        .route("/crops", get(handlers::list_crops))
        // Pipeline stages
        .route("/environment", post(handlers::generate_environment))
        .route("/production", post(handlers::simulate_production))
        .route("/financials", post(handlers::compute_financials))
        // Derived analytics
        .route("/kpis", post(handlers::compute_kpis))
        .route("/forecast", post(handlers::compute_forecast))
        // Full pipeline, one call per dashboard refresh
        .route("/simulation", post(handlers::run_simulation))
}
