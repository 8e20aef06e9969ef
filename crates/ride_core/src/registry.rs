//! In-memory identity registry for drivers and customers.

use std::collections::HashMap;

use tracing::info;

use crate::error::{BookingError, RegistryError, UserKind};
use crate::user::{Customer, Driver, Profile, User};

/// Holds every registered driver and customer.
///
/// Drivers are kept in registration order (the order the matcher scans them
/// in) with a side index by id. Driver and customer ids are separate
/// namespaces.
#[derive(Debug, Default)]
pub struct Registry {
    drivers: Vec<Driver>,
    driver_index: HashMap<String, usize>,
    customers: HashMap<String, Customer>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a driver. Fails on an empty or already registered id.
    pub fn register_driver(&mut self, profile: Profile) -> Result<&Driver, RegistryError> {
        validate_id(&profile.id, UserKind::Driver)?;
        if self.driver_index.contains_key(&profile.id) {
            return Err(RegistryError::DuplicateId {
                kind: UserKind::Driver,
                id: profile.id,
            });
        }

        let index = self.drivers.len();
        self.driver_index.insert(profile.id.clone(), index);
        self.drivers.push(Driver::new(profile));
        let driver = &self.drivers[index];
        info!(driver_id = driver.id(), "driver registered");
        Ok(driver)
    }

    /// Register a customer. Fails on an empty or already registered id.
    pub fn register_customer(&mut self, profile: Profile) -> Result<&Customer, RegistryError> {
        validate_id(&profile.id, UserKind::Customer)?;
        if self.customers.contains_key(&profile.id) {
            return Err(RegistryError::DuplicateId {
                kind: UserKind::Customer,
                id: profile.id,
            });
        }

        let id = profile.id.clone();
        info!(customer_id = %id, "customer registered");
        Ok(self
            .customers
            .entry(id)
            .or_insert_with(|| Customer::new(profile)))
    }

    /// Check a customer's credentials.
    ///
    /// Unknown ids and wrong passwords both produce
    /// [`BookingError::InvalidCredentials`].
    pub fn authenticate_customer(
        &self,
        id: &str,
        password: &str,
    ) -> Result<&Customer, BookingError> {
        self.customers
            .get(id)
            .filter(|customer| customer.profile.password.matches(password))
            .ok_or(BookingError::InvalidCredentials)
    }

    /// Drivers in registration order.
    pub fn list_drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn driver(&self, id: &str) -> Option<&Driver> {
        self.driver_index.get(id).map(|&index| &self.drivers[index])
    }

    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.get(id)
    }

    pub fn driver_count(&self) -> usize {
        self.drivers.len()
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// Every registered user: drivers first in registration order, then
    /// customers sorted by id.
    pub fn users(&self) -> impl Iterator<Item = User<'_>> {
        let mut customers: Vec<&Customer> = self.customers.values().collect();
        customers.sort_by(|left, right| left.id().cmp(right.id()));
        self.drivers
            .iter()
            .map(User::Driver)
            .chain(customers.into_iter().map(User::Customer))
    }

    pub(crate) fn driver_at(&self, index: usize) -> Option<&Driver> {
        self.drivers.get(index)
    }

    pub(crate) fn driver_at_mut(&mut self, index: usize) -> Option<&mut Driver> {
        self.drivers.get_mut(index)
    }
}

fn validate_id(id: &str, kind: UserKind) -> Result<(), RegistryError> {
    if id.trim().is_empty() {
        return Err(RegistryError::EmptyId { kind });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, password: &str) -> Profile {
        Profile::new(id, format!("name-{id}"), "555-0000", password)
    }

    #[test]
    fn duplicate_driver_id_is_rejected_and_first_entry_kept() {
        let mut registry = Registry::new();
        registry
            .register_driver(Profile::new("D1", "First", "1", "a"))
            .expect("first registration");

        let err = registry
            .register_driver(Profile::new("D1", "Second", "2", "b"))
            .expect_err("duplicate must fail");
        assert_eq!(
            err,
            RegistryError::DuplicateId {
                kind: UserKind::Driver,
                id: "D1".to_string()
            }
        );
        assert_eq!(registry.driver_count(), 1);
        assert_eq!(registry.driver("D1").map(Driver::name), Some("First"));
    }

    #[test]
    fn driver_and_customer_namespaces_are_separate() {
        let mut registry = Registry::new();
        registry.register_driver(profile("X", "pw")).expect("driver");
        registry.register_customer(profile("X", "pw")).expect("customer");
        assert_eq!(registry.driver_count(), 1);
        assert_eq!(registry.customer_count(), 1);
    }

    #[test]
    fn blank_ids_are_rejected() {
        let mut registry = Registry::new();
        assert_eq!(
            registry.register_customer(profile("  ", "pw")).unwrap_err(),
            RegistryError::EmptyId {
                kind: UserKind::Customer
            }
        );
        assert_eq!(registry.customer_count(), 0);
    }

    #[test]
    fn authentication_rejects_unknown_id_and_wrong_password_alike() {
        let mut registry = Registry::new();
        registry.register_customer(profile("C1", "Secret")).expect("customer");

        assert_eq!(
            registry.authenticate_customer("C1", "Secret").map(Customer::id),
            Ok("C1")
        );
        assert_eq!(
            registry.authenticate_customer("C1", "secret").unwrap_err(),
            BookingError::InvalidCredentials
        );
        assert_eq!(
            registry.authenticate_customer("C2", "Secret").unwrap_err(),
            BookingError::InvalidCredentials
        );
    }

    #[test]
    fn drivers_are_listed_in_registration_order() {
        let mut registry = Registry::new();
        for id in ["D3", "D1", "D2"] {
            registry.register_driver(profile(id, "pw")).expect("driver");
        }
        let ids: Vec<&str> = registry.list_drivers().iter().map(Driver::id).collect();
        assert_eq!(ids, ["D3", "D1", "D2"]);
    }

    #[test]
    fn users_lists_drivers_then_sorted_customers() {
        let mut registry = Registry::new();
        registry.register_driver(profile("D1", "pw")).expect("driver");
        registry.register_customer(profile("C2", "pw")).expect("customer");
        registry.register_customer(profile("C1", "pw")).expect("customer");

        let ids: Vec<&str> = registry.users().map(|user| user.id()).collect();
        assert_eq!(ids, ["D1", "C1", "C2"]);
    }
}
