//! Fare calculation for completed rides.

use crate::error::BookingError;

/// Flat charge applied to every ride.
pub const BASE_FARE: f64 = 50.0;

/// Charge per kilometre travelled.
pub const PER_KM_RATE: f64 = 12.0;

/// Rates used by [`PricingConfig::calculate_fare`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingConfig {
    pub base_fare: f64,
    pub per_km_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_fare: BASE_FARE,
            per_km_rate: PER_KM_RATE,
        }
    }
}

impl PricingConfig {
    /// Formula: `fare = base_fare + distance_km * per_km_rate`
    ///
    /// Distance must be finite and strictly positive.
    pub fn calculate_fare(&self, distance_km: f64) -> Result<f64, BookingError> {
        validate_distance(distance_km)?;
        Ok(self.base_fare + distance_km * self.per_km_rate)
    }
}

/// Fare under the default rates.
pub fn calculate_fare(distance_km: f64) -> Result<f64, BookingError> {
    PricingConfig::default().calculate_fare(distance_km)
}

pub(crate) fn validate_distance(distance_km: f64) -> Result<(), BookingError> {
    if distance_km.is_finite() && distance_km > 0.0 {
        Ok(())
    } else {
        Err(BookingError::InvalidDistance(distance_km))
    }
}
