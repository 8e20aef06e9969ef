use crate::user::Driver;

/// Picks the driver a booking request is assigned to.
///
/// Policies only ever select among drivers whose `is_available()` is true,
/// and must be deterministic for a given slice so bookings are reproducible.
///
/// # Examples
///
/// ```rust
/// use ride_core::matching::{FirstRegisteredMatching, MatchingPolicy};
/// use ride_core::registry::Registry;
/// use ride_core::user::Profile;
///
/// let mut registry = Registry::new();
/// registry.register_driver(Profile::new("D1", "Asha", "555-0100", "pw")).unwrap();
///
/// let chosen = FirstRegisteredMatching.find_available_driver(registry.list_drivers());
/// assert_eq!(chosen, Some(0));
/// ```
pub trait MatchingPolicy: std::fmt::Debug {
    /// Returns the index into `drivers` of the selected driver, or `None` when
    /// nobody is available.
    fn find_available_driver(&self, drivers: &[Driver]) -> Option<usize>;
}
