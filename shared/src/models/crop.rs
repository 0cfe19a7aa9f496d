//! Crop reference data models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Crops supported by the simulator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CropKind {
    Wheat,
    Soy,
    Barley,
    Sunflower,
    Corn,
}

impl CropKind {
    pub const ALL: [CropKind; 5] = [
        CropKind::Wheat,
        CropKind::Soy,
        CropKind::Barley,
        CropKind::Sunflower,
        CropKind::Corn,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            CropKind::Wheat => "wheat",
            CropKind::Soy => "soy",
            CropKind::Barley => "barley",
            CropKind::Sunflower => "sunflower",
            CropKind::Corn => "corn",
        }
    }
}

impl fmt::Display for CropKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when a crop identifier is not in the catalog
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown crop identifier: {0}")]
pub struct UnknownCropError(pub String);

impl FromStr for CropKind {
    type Err = UnknownCropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CropKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| UnknownCropError(s.to_string()))
    }
}

/// Economic parameters for one crop
///
/// Both prices are intentional: the reference price belongs to the agronomic
/// catalog and is used for cost modeling, while the market price is the sale
/// price applied to revenue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CropEconomics {
    /// Catalog reference price (currency per ton)
    pub reference_price_per_ton: f64,
    /// Market sale price applied to daily revenue (currency per ton)
    pub market_price_per_ton: f64,
    /// Flat production cost (currency per hectare)
    pub cost_per_hectare: f64,
    /// Base variable cost before scale economies (currency per hectare)
    pub base_variable_cost_per_ha: f64,
}

/// Static agronomic and economic parameters for one crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropParameters {
    pub kind: CropKind,
    /// Optimal temperature band (min, max) in celsius
    pub optimal_temp_min: f64,
    pub optimal_temp_max: f64,
    /// Days from planting to harvest
    pub growth_days: u32,
    /// Tons per hectare under ideal daily conditions
    pub base_yield_t_per_ha: f64,
    /// Millimetres of rain needed per day
    pub water_requirement_mm: f64,
    pub economics: CropEconomics,
    /// Calendar months (1-12) in which planting happens
    pub planting_months: Vec<u32>,
}

impl CropParameters {
    /// Midpoint of the optimal temperature band
    pub fn optimal_temp_midpoint(&self) -> f64 {
        (self.optimal_temp_min + self.optimal_temp_max) / 2.0
    }

    /// Half the width of the optimal temperature band
    pub fn optimal_temp_half_width(&self) -> f64 {
        (self.optimal_temp_max - self.optimal_temp_min) / 2.0
    }
}
