//! Financial derivation service
//!
//! Revenue follows daily yield at the crop's market price. Costs are a
//! smooth period total spread over the days with independent Gaussian noise,
//! so they fluctuate day to day but never deterministically.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use shared::{CropEconomics, DailyFinancialRecord, FinancialSeries, ProductionSeries};

/// Period-wide overhead independent of farm size (currency)
const FIXED_BUSINESS_COST: f64 = 15_000.0;
/// Land rent (currency per hectare per period)
const LAND_RENT_PER_HA: f64 = 300.0;
/// Relative stddev of the daily cost noise
const DAILY_COST_NOISE_STDDEV: f64 = 0.1;
/// Variable cost never drops below this share of its base, whatever the
/// farm size; keeps the scale-economy dampening from collapsing marginal
/// cost at very large farms.
const VARIABLE_COST_FLOOR: f64 = 0.5;

/// Derives daily revenue, costs and profit from a production series
#[derive(Debug, Clone)]
pub struct FinancialModel {
    economics: CropEconomics,
    farm_size_ha: f64,
}

impl FinancialModel {
    /// Farm size must already be validated as strictly positive.
    pub fn new(economics: CropEconomics, farm_size_ha: f64) -> Self {
        Self {
            economics,
            farm_size_ha,
        }
    }

    /// Smooth cost of the whole period before daily noise:
    /// fixed overhead + land rent + scale-dampened variable cost.
    pub fn total_period_cost(&self) -> f64 {
        let land_rent = LAND_RENT_PER_HA * self.farm_size_ha;

        let base = self.economics.base_variable_cost_per_ha;
        let variable_cost_per_ha =
            (base / (1.0 + 0.4 * (1.0 + self.farm_size_ha).ln())).max(VARIABLE_COST_FLOOR * base);
        let variable_cost = variable_cost_per_ha * self.farm_size_ha;

        FIXED_BUSINESS_COST + land_rent + variable_cost
    }

    /// Produce one financial record per production record.
    ///
    /// An empty production series yields an empty record list while still
    /// reporting the smooth period cost.
    pub fn compute(&self, production: &ProductionSeries, rng: &mut impl Rng) -> FinancialSeries {
        let total_period_cost = self.total_period_cost();

        if production.is_empty() {
            return FinancialSeries {
                records: Vec::new(),
                total_period_cost,
            };
        }

        let base_daily_cost = total_period_cost / production.len() as f64;
        let noise = Normal::new(0.0, DAILY_COST_NOISE_STDDEV)
            .unwrap_or_else(|_| Normal::new(0.0, 0.1).unwrap());

        let records = production
            .records
            .iter()
            .map(|day| {
                let revenue = day.yield_tons * self.economics.market_price_per_ton;
                let costs = base_daily_cost * (1.0 + noise.sample(rng));
                DailyFinancialRecord {
                    date: day.date,
                    revenue,
                    costs,
                    profit: revenue - costs,
                }
            })
            .collect();

        FinancialSeries {
            records,
            total_period_cost,
        }
    }
}
