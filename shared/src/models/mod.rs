//! Domain models for the Farm Simulation Platform

pub mod crop;
pub mod environment;
pub mod financial;
pub mod forecast;
pub mod kpi;
pub mod production;

pub use crop::*;
pub use environment::*;
pub use financial::*;
pub use forecast::*;
pub use kpi::*;
pub use production::*;
