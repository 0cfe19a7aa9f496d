//! HTTP handlers for the Farm Simulation Platform

pub mod crops;
pub mod environment;
pub mod financial;
pub mod forecast;
pub mod health;
pub mod kpi;
pub mod production;
pub mod simulation;

pub use crops::list_crops;
pub use environment::generate_environment;
pub use financial::compute_financials;
pub use forecast::compute_forecast;
pub use health::health_check;
pub use kpi::compute_kpis;
pub use production::simulate_production;
pub use simulation::run_simulation;
