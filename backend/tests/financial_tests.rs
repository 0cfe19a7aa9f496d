//! Financial derivation integration tests
//!
//! Covers the profit identity, series shape, the period cost formula and
//! the behavior of daily cost noise.

use chrono::NaiveDate;
use farm_sim_backend::services::{
    CropCatalog, EnvironmentGenerator, FinancialModel, ProductionSimulator,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use shared::{CropKind, DateRange, ProductionSeries};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn pipeline_to_financial(
    kind: CropKind,
    farm_size: f64,
    days: i64,
    seed: u64,
) -> (ProductionSeries, shared::FinancialSeries) {
    let catalog = CropCatalog::new();
    let params = catalog.get(kind).clone();
    let mut rng = StdRng::seed_from_u64(seed);

    let environment = EnvironmentGenerator::new(
        "TestFarm",
        DateRange::new(date(2024, 1, 1), date(2024, 1, 1) + chrono::Duration::days(days - 1)),
    )
    .generate(&mut rng);
    let production = ProductionSimulator::new(params.clone(), farm_size).simulate(&environment);
    let financial = FinancialModel::new(params.economics, farm_size).compute(&production, &mut rng);
    (production, financial)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_financial_length_matches_production() {
    // 10 days of production yield 10 financial records
    let (production, financial) = pipeline_to_financial(CropKind::Wheat, 100.0, 10, 42);
    assert_eq!(financial.len(), production.len());
    assert_eq!(financial.len(), 10);
}

#[test]
fn test_profit_identity_holds_for_every_record() {
    let (_, financial) = pipeline_to_financial(CropKind::Corn, 250.0, 30, 7);
    for record in &financial.records {
        assert_eq!(record.profit, record.revenue - record.costs);
    }
}

#[test]
fn test_revenue_non_negative() {
    let (_, financial) = pipeline_to_financial(CropKind::Soy, 50.0, 30, 9);
    assert!(financial.records.iter().all(|r| r.revenue >= 0.0));
}

#[test]
fn test_period_cost_scales_with_farm_size() {
    let catalog = CropCatalog::new();
    let economics = catalog.get(CropKind::Wheat).economics;
    let small = FinancialModel::new(economics, 10.0).total_period_cost();
    let large = FinancialModel::new(economics, 1_000.0).total_period_cost();
    assert!(large > small);
}

#[test]
fn test_costs_fluctuate_day_to_day() {
    // With noise the daily costs are not all identical
    let (_, financial) = pipeline_to_financial(CropKind::Wheat, 100.0, 60, 1);
    let first = financial.records[0].costs;
    assert!(financial.records.iter().any(|r| (r.costs - first).abs() > 1e-9));
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Financial series always pairs the production series record for record
    #[test]
    fn prop_shape_and_profit_identity(
        seed in any::<u64>(),
        farm_size in 1.0f64..2_000.0,
        days in 1i64..90,
    ) {
        let (production, financial) =
            pipeline_to_financial(CropKind::Barley, farm_size, days, seed);
        prop_assert_eq!(financial.len(), production.len());
        for (p, f) in production.records.iter().zip(&financial.records) {
            prop_assert_eq!(p.date, f.date);
            prop_assert_eq!(f.profit, f.revenue - f.costs);
        }
    }

    /// The smooth period cost is positive and honors the variable-cost floor
    #[test]
    fn prop_period_cost_bounds(farm_size in 0.1f64..100_000.0) {
        let catalog = CropCatalog::new();
        let economics = catalog.get(CropKind::Sunflower).economics;
        let total = FinancialModel::new(economics, farm_size).total_period_cost();

        let base = economics.base_variable_cost_per_ha;
        let lower = 15_000.0 + 300.0 * farm_size + 0.5 * base * farm_size;
        let upper = 15_000.0 + 300.0 * farm_size + base * farm_size;
        prop_assert!(total >= lower - 1e-6);
        prop_assert!(total <= upper + 1e-6);
    }
}
