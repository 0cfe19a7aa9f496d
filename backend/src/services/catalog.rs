//! Crop catalog service exposing static agronomic and economic reference data

use shared::{CropEconomics, CropKind, CropParameters, UnknownCropError};

/// Static per-crop reference data
///
/// Parameters are fixed at build time and not user-editable at runtime.
/// Both a catalog reference price and a market sale price are carried per
/// crop; revenue uses the market price.
#[derive(Clone)]
pub struct CropCatalog {
    crops: Vec<CropParameters>,
}

impl Default for CropCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CropCatalog {
    pub fn new() -> Self {
        Self {
            crops: CropKind::ALL.iter().map(|kind| build_parameters(*kind)).collect(),
        }
    }

    /// Look up the parameters of a supported crop
    pub fn get(&self, kind: CropKind) -> &CropParameters {
        // CropKind is the closed set of supported crops, so this never misses
        self.crops
            .iter()
            .find(|c| c.kind == kind)
            .unwrap_or(&self.crops[0])
    }

    /// Resolve a crop identifier string against the catalog
    pub fn resolve(&self, id: &str) -> Result<&CropParameters, UnknownCropError> {
        let kind: CropKind = id.parse()?;
        Ok(self.get(kind))
    }

    /// All supported crops
    pub fn all(&self) -> &[CropParameters] {
        &self.crops
    }
}

fn build_parameters(kind: CropKind) -> CropParameters {
    match kind {
        CropKind::Wheat => CropParameters {
            kind,
            optimal_temp_min: 15.0,
            optimal_temp_max: 25.0,
            growth_days: 180,
            base_yield_t_per_ha: 7.0,
            water_requirement_mm: 4.5,
            economics: CropEconomics {
                reference_price_per_ton: 250.0,
                market_price_per_ton: 230.0,
                cost_per_hectare: 1000.0,
                base_variable_cost_per_ha: 800.0,
            },
            planting_months: vec![10, 11, 12],
        },
        CropKind::Soy => CropParameters {
            kind,
            optimal_temp_min: 20.0,
            optimal_temp_max: 30.0,
            growth_days: 150,
            base_yield_t_per_ha: 3.2,
            water_requirement_mm: 5.0,
            economics: CropEconomics {
                reference_price_per_ton: 500.0,
                market_price_per_ton: 510.0,
                cost_per_hectare: 800.0,
                base_variable_cost_per_ha: 900.0,
            },
            planting_months: vec![4, 5],
        },
        CropKind::Barley => CropParameters {
            kind,
            optimal_temp_min: 12.0,
            optimal_temp_max: 22.0,
            growth_days: 170,
            base_yield_t_per_ha: 6.5,
            water_requirement_mm: 4.2,
            economics: CropEconomics {
                reference_price_per_ton: 230.0,
                market_price_per_ton: 215.0,
                cost_per_hectare: 900.0,
                base_variable_cost_per_ha: 750.0,
            },
            planting_months: vec![10, 11],
        },
        CropKind::Sunflower => CropParameters {
            kind,
            optimal_temp_min: 18.0,
            optimal_temp_max: 28.0,
            growth_days: 130,
            base_yield_t_per_ha: 2.8,
            water_requirement_mm: 4.8,
            economics: CropEconomics {
                reference_price_per_ton: 400.0,
                market_price_per_ton: 420.0,
                cost_per_hectare: 750.0,
                base_variable_cost_per_ha: 850.0,
            },
            planting_months: vec![3, 4, 5],
        },
        CropKind::Corn => CropParameters {
            kind,
            optimal_temp_min: 18.0,
            optimal_temp_max: 30.0,
            growth_days: 150,
            base_yield_t_per_ha: 10.5,
            water_requirement_mm: 5.5,
            economics: CropEconomics {
                reference_price_per_ton: 210.0,
                market_price_per_ton: 200.0,
                cost_per_hectare: 1100.0,
                base_variable_cost_per_ha: 1000.0,
            },
            planting_months: vec![4, 5],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_all_crops() {
        let catalog = CropCatalog::new();
        assert_eq!(catalog.all().len(), CropKind::ALL.len());
        for kind in CropKind::ALL {
            assert_eq!(catalog.get(kind).kind, kind);
        }
    }

    #[test]
    fn resolve_known_identifier() {
        let catalog = CropCatalog::new();
        let wheat = catalog.resolve("wheat").unwrap();
        assert_eq!(wheat.base_yield_t_per_ha, 7.0);
        assert_eq!(wheat.economics.market_price_per_ton, 230.0);
        assert_eq!(wheat.economics.reference_price_per_ton, 250.0);
    }

    #[test]
    fn resolve_unknown_identifier_fails() {
        let catalog = CropCatalog::new();
        assert!(catalog.resolve("rice").is_err());
    }

    #[test]
    fn planting_months_are_valid() {
        let catalog = CropCatalog::new();
        for crop in catalog.all() {
            assert!(!crop.planting_months.is_empty());
            for month in &crop.planting_months {
                assert!(shared::validate_month(*month).is_ok());
            }
        }
    }

    #[test]
    fn optimal_temperature_bands_are_ordered() {
        let catalog = CropCatalog::new();
        for crop in catalog.all() {
            assert!(crop.optimal_temp_min < crop.optimal_temp_max);
            assert!(crop.water_requirement_mm > 0.0);
            assert!(crop.base_yield_t_per_ha > 0.0);
        }
    }
}
