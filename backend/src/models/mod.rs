//! Domain models for the Farm Simulation Platform
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
