//! Farm Simulation Platform - Backend Library
//!
//! Synthesizes a daily agricultural operating record (weather, crop yield,
//! financial outcome) for a hypothetical farm and derives KPIs and scenario
//! forecasts from it. The visualization front end calls this service with
//! user-selected parameters and renders the structured results.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}
