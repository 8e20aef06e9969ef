//! The ride-sharing system: registry, matcher and ledger behind one API.

use tracing::debug;

use crate::booking::BookingPhase;
use crate::config::SystemConfig;
use crate::error::{BookingError, RegistryError};
use crate::ledger::RideLedger;
use crate::matching::{MatchingPolicy, MatchingPolicyKind};
use crate::pricing::PricingConfig;
use crate::registry::Registry;
use crate::ride::Ride;
use crate::store::{FileRideStore, RideStore};
use crate::user::{Customer, Driver, Profile};

/// Owns all process-local state. Nothing here is global; callers hold the
/// system and pass it around by reference.
#[derive(Debug)]
pub struct RideSharingSystem<S = FileRideStore> {
    pub(crate) registry: Registry,
    pub(crate) ledger: RideLedger<S>,
    pub(crate) matcher: Box<dyn MatchingPolicy>,
    pub(crate) phase: BookingPhase,
}

impl RideSharingSystem<FileRideStore> {
    /// System that appends rides to `config.rides_path`.
    pub fn from_config(config: &SystemConfig) -> Self {
        Self::with_store(
            FileRideStore::new(config.rides_path.clone()),
            config.pricing,
            config.matching,
        )
    }
}

impl<S: RideStore> RideSharingSystem<S> {
    pub fn with_store(store: S, pricing: PricingConfig, matching: MatchingPolicyKind) -> Self {
        Self {
            registry: Registry::new(),
            ledger: RideLedger::new(store, pricing),
            matcher: matching.build(),
            phase: BookingPhase::Idle,
        }
    }

    pub fn register_driver(
        &mut self,
        id: &str,
        name: &str,
        phone: &str,
        password: &str,
    ) -> Result<&Driver, RegistryError> {
        self.registry
            .register_driver(Profile::new(id, name, phone, password))
    }

    pub fn register_customer(
        &mut self,
        id: &str,
        name: &str,
        phone: &str,
        password: &str,
    ) -> Result<&Customer, RegistryError> {
        self.registry
            .register_customer(Profile::new(id, name, phone, password))
    }

    /// Authenticate a customer without starting a booking.
    pub fn login(&self, id: &str, password: &str) -> Result<&Customer, BookingError> {
        self.registry.authenticate_customer(id, password)
    }

    pub fn list_drivers(&self) -> &[Driver] {
        self.registry.list_drivers()
    }

    pub fn ride_history(&self) -> &[Ride] {
        self.ledger.history()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn ledger(&self) -> &RideLedger<S> {
        &self.ledger
    }

    pub fn phase(&self) -> BookingPhase {
        self.phase
    }

    pub(crate) fn transition(&mut self, next: BookingPhase) {
        debug!(from = ?self.phase, to = ?next, "booking phase");
        self.phase = next;
    }

    pub(crate) fn set_driver_available(&mut self, driver_index: usize, available: bool) {
        if let Some(driver) = self.registry.driver_at_mut(driver_index) {
            driver.set_available(available);
            debug!(driver_id = driver.id(), available, "driver availability");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryRideStore;

    #[test]
    fn from_config_targets_configured_path() {
        let config = SystemConfig::default().with_rides_path("ledger.csv");
        let system: RideSharingSystem = RideSharingSystem::from_config(&config);
        assert_eq!(
            system.ledger().store().path(),
            std::path::Path::new("ledger.csv")
        );
        assert_eq!(system.phase(), BookingPhase::Idle);
    }

    #[test]
    fn login_does_not_touch_booking_state() {
        let mut system = RideSharingSystem::with_store(
            MemoryRideStore::new(),
            PricingConfig::default(),
            MatchingPolicyKind::default(),
        );
        system
            .register_customer("C1", "Ben", "555", "pw")
            .expect("customer");

        assert_eq!(system.login("C1", "pw").map(Customer::id), Ok("C1"));
        assert_eq!(
            system.login("C1", "PW").unwrap_err(),
            BookingError::InvalidCredentials
        );
        assert_eq!(system.phase(), BookingPhase::Idle);
        assert_eq!(system.ledger().next_ride_id(), "R1");
    }
}
