//! Week-over-week trend computation and KPI derivation
//!
//! A trend compares the most recent 7-day sum of a metric against the
//! preceding 7-day sum. Fewer than 14 records means there is not enough
//! history and the trend reads 0; a zero previous week also reads 0 rather
//! than dividing by zero. Neither case is an error.

use shared::{CropParameters, FinancialSeries, KpiReport, ProductionSeries};

const WEEK: usize = 7;
const MIN_HISTORY: usize = 2 * WEEK;

/// Sums of the last and preceding 7-day windows
fn weekly_sums(values: &[f64]) -> Option<(f64, f64)> {
    if values.len() < MIN_HISTORY {
        return None;
    }
    let last: f64 = values[values.len() - WEEK..].iter().sum();
    let prev: f64 = values[values.len() - MIN_HISTORY..values.len() - WEEK]
        .iter()
        .sum();
    Some((last, prev))
}

/// Percentage change between the last two 7-day sums of a non-negative
/// metric (yield, costs).
pub fn week_over_week(values: &[f64]) -> f64 {
    match weekly_sums(values) {
        Some((last, prev)) if prev != 0.0 => (last - prev) / prev * 100.0,
        _ => 0.0,
    }
}

/// Percentage change for a signed metric (profit). The denominator uses the
/// absolute value so that sign flips trend in the right direction.
pub fn week_over_week_signed(values: &[f64]) -> f64 {
    match weekly_sums(values) {
        Some((last, prev)) if prev != 0.0 => (last - prev) / prev.abs() * 100.0,
        _ => 0.0,
    }
}

/// Trend of weekly efficiency: each week's yield sum expressed as a
/// percentage of the weekly theoretical maximum (farm size x base yield),
/// then trended with the same week-over-week formula.
pub fn efficiency_week_over_week(yields: &[f64], weekly_potential: f64) -> f64 {
    if weekly_potential <= 0.0 {
        return 0.0;
    }
    match weekly_sums(yields) {
        Some((last, prev)) => {
            let last_pct = last / weekly_potential * 100.0;
            let prev_pct = prev / weekly_potential * 100.0;
            if prev_pct != 0.0 {
                (last_pct - prev_pct) / prev_pct * 100.0
            } else {
                0.0
            }
        }
        None => 0.0,
    }
}

/// Derive the headline KPI report for one simulated period.
pub fn compute_kpis(
    production: &ProductionSeries,
    financial: &FinancialSeries,
    params: &CropParameters,
    farm_size_ha: f64,
) -> KpiReport {
    let total_yield = production.total_yield();
    let potential_yield = params.base_yield_t_per_ha * farm_size_ha;
    let efficiency_pct = if potential_yield > 0.0 {
        total_yield / potential_yield * 100.0
    } else {
        0.0
    };

    let yields: Vec<f64> = production.records.iter().map(|r| r.yield_tons).collect();
    let costs: Vec<f64> = financial.records.iter().map(|r| r.costs).collect();
    let profits: Vec<f64> = financial.records.iter().map(|r| r.profit).collect();

    KpiReport {
        total_yield_tons: total_yield,
        efficiency_pct,
        total_costs: financial.total_costs(),
        total_profit: financial.total_profit(),
        yield_trend_pct: week_over_week(&yields),
        efficiency_trend_pct: efficiency_week_over_week(&yields, potential_yield),
        cost_trend_pct: week_over_week(&costs),
        profit_trend_pct: week_over_week_signed(&profits),
    }
}
