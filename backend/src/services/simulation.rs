//! End-to-end simulation pipeline
//!
//! Mirrors what the dashboard triggers on every parameter change: weather
//! generation, production simulation, financial derivation, then the KPI
//! report and the scenario forecast. Each run is request-scoped and owns its
//! data; nothing is shared between invocations.

use rand::Rng;
use shared::{
    DateRange, EnvironmentalSeries, FinancialSeries, ForecastTable, KpiReport, ProductionSeries,
};

use crate::error::{AppError, AppResult};
use crate::services::{
    catalog::CropCatalog, environment::EnvironmentGenerator, financial::FinancialModel,
    forecast, production::ProductionSimulator, trend,
};

/// Everything one pipeline run produces
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub environment: EnvironmentalSeries,
    pub production: ProductionSeries,
    /// Running total of daily yield, for the cumulative chart
    pub cumulative_yield: Vec<f64>,
    pub financial: FinancialSeries,
    pub kpis: KpiReport,
    pub forecast: ForecastTable,
}

/// Orchestrates the full simulation pipeline
#[derive(Clone, Default)]
pub struct SimulationService {
    catalog: CropCatalog,
}

impl SimulationService {
    pub fn new() -> Self {
        Self {
            catalog: CropCatalog::new(),
        }
    }

    pub fn catalog(&self) -> &CropCatalog {
        &self.catalog
    }

    /// Run the whole pipeline for one parameter selection.
    pub fn run(
        &self,
        location: &str,
        range: DateRange,
        crop_id: &str,
        farm_size_ha: f64,
        rng: &mut impl Rng,
    ) -> AppResult<SimulationOutcome> {
        validate_farm_size(farm_size_ha)?;
        let params = self.catalog.resolve(crop_id)?.clone();

        let environment = EnvironmentGenerator::new(location, range).generate(rng);

        let production = ProductionSimulator::new(params.clone(), farm_size_ha).simulate(&environment);
        let cumulative_yield = production.cumulative_yield();

        let financial =
            FinancialModel::new(params.economics, farm_size_ha).compute(&production, rng);

        let kpis = trend::compute_kpis(&production, &financial, &params, farm_size_ha);
        let forecast = forecast::project(&production, &financial);

        tracing::debug!(
            crop = crop_id,
            days = environment.len(),
            total_yield = kpis.total_yield_tons,
            "simulation pipeline complete"
        );

        Ok(SimulationOutcome {
            environment,
            production,
            cumulative_yield,
            financial,
            kpis,
            forecast,
        })
    }
}

/// Map the shared validation onto the API error type
pub fn validate_farm_size(farm_size_ha: f64) -> AppResult<()> {
    shared::validate_farm_size(farm_size_ha).map_err(|message| AppError::Validation {
        field: "farm_size_ha".to_string(),
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::{rngs::StdRng, SeedableRng};

    fn january_range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        )
    }

    #[test]
    fn pipeline_shapes_are_consistent() {
        let service = SimulationService::new();
        let mut rng = StdRng::seed_from_u64(42);
        let outcome = service
            .run("TestFarm", january_range(), "wheat", 100.0, &mut rng)
            .unwrap();

        assert_eq!(outcome.environment.len(), 10);
        assert_eq!(outcome.production.len(), 10);
        assert_eq!(outcome.cumulative_yield.len(), 10);
        assert_eq!(outcome.financial.len(), 10);
        assert_eq!(outcome.forecast.len(), 12);
        assert!(outcome.production.records.iter().all(|r| r.yield_tons >= 0.0));
    }

    #[test]
    fn unknown_crop_is_rejected() {
        let service = SimulationService::new();
        let mut rng = StdRng::seed_from_u64(42);
        let err = service
            .run("TestFarm", january_range(), "rice", 100.0, &mut rng)
            .unwrap_err();
        assert!(matches!(err, AppError::UnknownCrop(_)));
    }

    #[test]
    fn non_positive_farm_size_is_rejected() {
        let service = SimulationService::new();
        let mut rng = StdRng::seed_from_u64(42);
        let err = service
            .run("TestFarm", january_range(), "wheat", 0.0, &mut rng)
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn seeded_runs_are_bit_identical() {
        let service = SimulationService::new();
        let first = service
            .run(
                "TestFarm",
                january_range(),
                "corn",
                150.0,
                &mut StdRng::seed_from_u64(2024),
            )
            .unwrap();
        let second = service
            .run(
                "TestFarm",
                january_range(),
                "corn",
                150.0,
                &mut StdRng::seed_from_u64(2024),
            )
            .unwrap();

        assert_eq!(first.environment, second.environment);
        assert_eq!(first.production, second.production);
        assert_eq!(first.financial, second.financial);
        assert_eq!(first.kpis, second.kpis);
        assert_eq!(first.forecast, second.forecast);
    }
}
