//! Simulation and analytics services for the Farm Simulation Platform

pub mod catalog;
pub mod environment;
pub mod financial;
pub mod forecast;
pub mod production;
pub mod simulation;
pub mod trend;

pub use catalog::CropCatalog;
pub use environment::EnvironmentGenerator;
pub use financial::FinancialModel;
pub use production::ProductionSimulator;
pub use simulation::{SimulationOutcome, SimulationService};

use rand::{rngs::StdRng, SeedableRng};

/// Random source for one request.
///
/// Unseeded requests draw from OS entropy, so repeated identical requests
/// produce different numeric output. Pinning a seed makes a run bit-identical
/// for reproducible testing.
pub fn request_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
