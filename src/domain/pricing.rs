//! Shipping price calculation.
//!
//! `amount = round(weight * per_kg + distance * per_km)`, rounding
//! half away from zero. With the default rates a 10 kg parcel over
//! 100 km costs 300.

use serde::{Deserialize, Serialize};

use super::error::{StoreError, StoreResult};

/// Default rate per kilogram.
pub const DEFAULT_PER_KG: f64 = 10.0;

/// Default rate per kilometre.
pub const DEFAULT_PER_KM: f64 = 2.0;

/// Result of a price quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub amount: u64,
}

/// Linear weight/distance tariff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingRules {
    pub per_kg: f64,
    pub per_km: f64,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            per_kg: DEFAULT_PER_KG,
            per_km: DEFAULT_PER_KM,
        }
    }
}

impl PricingRules {
    pub const fn new(per_kg: f64, per_km: f64) -> Self {
        Self { per_kg, per_km }
    }

    /// Price a shipment. Pure, no I/O.
    ///
    /// # Errors
    /// `Validation` if either input is NaN, infinite or negative.
    pub fn quote(&self, weight: f64, distance: f64) -> StoreResult<Quote> {
        check_measure("weight", weight)?;
        check_measure("distance", distance)?;

        #[allow(clippy::suboptimal_flops)]
        let raw = (weight * self.per_kg + distance * self.per_km).round();
        if !raw.is_finite() || raw > u64::MAX as f64 {
            return Err(StoreError::validation(format!(
                "quote out of range for weight {weight} and distance {distance}"
            )));
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let amount = raw as u64;
        Ok(Quote { amount })
    }
}

/// Quote with the default tariff.
pub fn quote(weight: f64, distance: f64) -> StoreResult<Quote> {
    PricingRules::default().quote(weight, distance)
}

fn check_measure(name: &str, value: f64) -> StoreResult<()> {
    if !value.is_finite() {
        return Err(StoreError::validation(format!("{name} must be a number")));
    }
    if value < 0.0 {
        return Err(StoreError::validation(format!(
            "{name} must not be negative, got {value}"
        )));
    }
    Ok(())
}
