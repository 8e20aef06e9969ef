//! Ride ledger: issues ride ids, prices rides, keeps history and forwards
//! every new ride to the durable store.

use tracing::{info, warn};

use crate::error::{BookingError, StoreError};
use crate::pricing::PricingConfig;
use crate::ride::{Ride, RideStatus};
use crate::store::RideStore;

/// Prefix of every generated ride id (`R1`, `R2`, ...).
pub const RIDE_ID_PREFIX: &str = "R";

#[derive(Debug)]
pub struct RideLedger<S> {
    rides: Vec<Ride>,
    next_ride_number: u64,
    pricing: PricingConfig,
    store: S,
}

impl<S: RideStore> RideLedger<S> {
    pub fn new(store: S, pricing: PricingConfig) -> Self {
        Self {
            rides: Vec::new(),
            next_ride_number: 1,
            pricing,
            store,
        }
    }

    pub fn calculate_fare(&self, distance_km: f64) -> Result<f64, BookingError> {
        self.pricing.calculate_fare(distance_km)
    }

    /// Price and record a new ride.
    ///
    /// The distance is validated before an id is issued, so a rejected
    /// request never consumes a ride number.
    pub fn create_ride(
        &mut self,
        customer_id: &str,
        driver_id: &str,
        distance_km: f64,
    ) -> Result<Ride, BookingError> {
        let fare = self.calculate_fare(distance_km)?;
        let ride = Ride {
            ride_id: format!("{RIDE_ID_PREFIX}{}", self.next_ride_number),
            customer_id: customer_id.to_string(),
            driver_id: driver_id.to_string(),
            distance_km,
            fare,
            status: RideStatus::Completed,
        };
        self.next_ride_number += 1;
        self.rides.push(ride.clone());
        info!(
            ride_id = ride.ride_id(),
            customer_id,
            driver_id,
            distance_km,
            fare,
            "ride recorded"
        );
        Ok(ride)
    }

    /// Append a ride to the durable store.
    pub fn persist(&mut self, ride: &Ride) -> Result<(), StoreError> {
        self.store.append(ride).inspect_err(|error| {
            warn!(ride_id = ride.ride_id(), %error, "failed to persist ride");
        })
    }

    /// Every ride created so far, oldest first.
    pub fn history(&self) -> &[Ride] {
        &self.rides
    }

    /// Id the next created ride will receive.
    pub fn next_ride_id(&self) -> String {
        format!("{RIDE_ID_PREFIX}{}", self.next_ride_number)
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
