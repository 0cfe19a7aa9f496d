//! Scenario forecast service
//!
//! A deterministic what-if multiplier model, not a statistical forecast: each
//! scenario scales the mean daily metrics by fixed factors. No smoothing or
//! confidence bounds.

use shared::{FinancialSeries, ForecastEntry, ForecastMetric, ForecastTable, ProductionSeries, Scenario};

/// Fixed multipliers per scenario for (yield, profit, cost)
const SCENARIO_MULTIPLIERS: [(Scenario, f64, f64, f64); 3] = [
    (Scenario::Pessimistic, 0.8, 0.7, 1.2),
    (Scenario::Neutral, 1.0, 1.0, 1.0),
    (Scenario::Optimistic, 1.2, 1.3, 0.9),
];

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Project the 12-row scenario table: 3 scenarios x {yield, profit, costs,
/// ROI}, where ROI is the scenario profit as a percentage of the smooth
/// total period cost.
pub fn project(production: &ProductionSeries, financial: &FinancialSeries) -> ForecastTable {
    let mean_yield = mean(production.records.iter().map(|r| r.yield_tons));
    let mean_profit = mean(financial.records.iter().map(|r| r.profit));
    let mean_cost = mean(financial.records.iter().map(|r| r.costs));
    let total_cost = financial.total_period_cost;

    let mut table = Vec::with_capacity(12);
    for (scenario, yield_mult, profit_mult, cost_mult) in SCENARIO_MULTIPLIERS {
        let scenario_profit = mean_profit * profit_mult;
        let roi = if total_cost != 0.0 {
            scenario_profit / total_cost * 100.0
        } else {
            0.0
        };

        table.push(ForecastEntry {
            scenario,
            metric: ForecastMetric::Yield,
            value: mean_yield * yield_mult,
        });
        table.push(ForecastEntry {
            scenario,
            metric: ForecastMetric::Profit,
            value: scenario_profit,
        });
        table.push(ForecastEntry {
            scenario,
            metric: ForecastMetric::Costs,
            value: mean_cost * cost_mult,
        });
        table.push(ForecastEntry {
            scenario,
            metric: ForecastMetric::Roi,
            value: roi,
        });
    }

    table
}
