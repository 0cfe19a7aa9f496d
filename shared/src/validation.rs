//! Validation utilities for the Farm Simulation Platform

use crate::models::DailyProductionRecord;

// ============================================================================
// Parameter Validations
// ============================================================================

/// Validate farm size in hectares (must be strictly positive and finite)
pub fn validate_farm_size(farm_size_ha: f64) -> Result<(), &'static str> {
    if !farm_size_ha.is_finite() {
        return Err("Farm size must be a finite number");
    }
    if farm_size_ha <= 0.0 {
        return Err("Farm size must be greater than zero");
    }
    Ok(())
}

/// Validate a calendar month number
pub fn validate_month(month: u32) -> Result<(), &'static str> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err("Month must be between 1 and 12")
    }
}

// ============================================================================
// Simulation Invariants
// ============================================================================

/// Check that a suitability factor lies in [0, 1]
pub fn is_valid_factor(factor: f64) -> bool {
    (0.0..=1.0).contains(&factor) && factor.is_finite()
}

/// Check the internal consistency of a production record
pub fn validate_production_record(record: &DailyProductionRecord) -> Result<(), &'static str> {
    if !is_valid_factor(record.temp_factor) {
        return Err("Temperature factor out of [0, 1]");
    }
    if !is_valid_factor(record.water_factor) {
        return Err("Water factor out of [0, 1]");
    }
    if !is_valid_factor(record.growth_factor) {
        return Err("Growth factor out of [0, 1]");
    }
    if record.yield_tons < 0.0 || !record.yield_tons.is_finite() {
        return Err("Yield must be non-negative");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn farm_size_must_be_positive() {
        assert!(validate_farm_size(100.0).is_ok());
        assert!(validate_farm_size(0.5).is_ok());
        assert!(validate_farm_size(0.0).is_err());
        assert!(validate_farm_size(-10.0).is_err());
        assert!(validate_farm_size(f64::NAN).is_err());
    }

    #[test]
    fn month_bounds() {
        assert!(validate_month(1).is_ok());
        assert!(validate_month(12).is_ok());
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
    }

    #[test]
    fn production_record_consistency() {
        let record = DailyProductionRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            temp_factor: 0.8,
            water_factor: 0.5,
            growth_factor: 0.4,
            yield_tons: 2.8,
        };
        assert!(validate_production_record(&record).is_ok());

        let bad = DailyProductionRecord {
            temp_factor: 1.2,
            ..record
        };
        assert!(validate_production_record(&bad).is_err());
    }
}
