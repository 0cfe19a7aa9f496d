//! Crop production simulation service
//!
//! Deterministic given its inputs: all stochasticity enters upstream through
//! the environmental series.

use shared::{
    CropParameters, DailyProductionRecord, EnvironmentalSeries, ProductionSeries,
};

/// Farm size against which base yield is calibrated
const REFERENCE_FARM_SIZE_HA: f64 = 100.0;

/// Simulates daily crop yield from a weather record
#[derive(Debug, Clone)]
pub struct ProductionSimulator {
    params: CropParameters,
    farm_size_ha: f64,
}

impl ProductionSimulator {
    /// Farm size must already be validated as strictly positive.
    pub fn new(params: CropParameters, farm_size_ha: f64) -> Self {
        Self {
            params,
            farm_size_ha,
        }
    }

    /// Produce one production record per environment record.
    pub fn simulate(&self, environment: &EnvironmentalSeries) -> ProductionSeries {
        let records = environment
            .records
            .iter()
            .map(|day| {
                let temp_factor = self.temp_factor(day.temperature);
                let water_factor = self.water_factor(day.precipitation);
                let growth_factor = temp_factor * water_factor;
                DailyProductionRecord {
                    date: day.date,
                    temp_factor,
                    water_factor,
                    growth_factor,
                    yield_tons: self.params.base_yield_t_per_ha
                        * growth_factor
                        * self.farm_size_ha
                        / REFERENCE_FARM_SIZE_HA,
                }
            })
            .collect();

        ProductionSeries { records }
    }

    /// Temperature suitability: 1.0 inside the optimal band, triangular
    /// falloff outside reaching 0 one half-width beyond the midpoint.
    pub fn temp_factor(&self, temperature: f64) -> f64 {
        if temperature >= self.params.optimal_temp_min
            && temperature <= self.params.optimal_temp_max
        {
            return 1.0;
        }
        let midpoint = self.params.optimal_temp_midpoint();
        let half_width = self.params.optimal_temp_half_width();
        (1.0 - (temperature - midpoint).abs() / half_width).max(0.0)
    }

    /// Water availability: rainfall relative to the daily requirement,
    /// saturating at 1.0 once the requirement is met.
    pub fn water_factor(&self, precipitation: f64) -> f64 {
        (precipitation / self.params.water_requirement_mm).clamp(0.0, 1.0)
    }
}
