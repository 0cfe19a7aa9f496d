//! Shared types and models for the Farm Simulation Platform
//!
//! This crate contains types shared between the backend and the
//! visualization front end that consumes its API.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
