//! Booking workflow: authenticate, match, price, record, rate, release.
//!
//! ```text
//! Idle -> Authenticating -> Matching -> Faring -> Booked -> Rating -> Idle
//! ```
//!
//! Any failure before `Booked` returns the system to `Idle` with no driver
//! reserved and no ride id consumed. Once a ride is booked the caller holds an
//! [`ActiveBooking`]; the driver is released when it is rated or dropped,
//! whichever happens first.

use tracing::info;

use crate::error::BookingError;
use crate::rating::{update_rating, RatingOutcome};
use crate::ride::Ride;
use crate::store::RideStore;
use crate::system::RideSharingSystem;
use crate::user::Driver;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookingPhase {
    #[default]
    Idle,
    Authenticating,
    Matching,
    Faring,
    Booked,
    Rating,
}

/// Result of a booking that has been rated and released.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingReceipt {
    pub ride: Ride,
    pub rating: RatingOutcome,
    /// Driver's average after this booking's rating was applied (or ignored).
    pub driver_rating: f64,
    /// False when the ride could not be appended to the store. The booking
    /// itself still stands.
    pub persisted: bool,
}

/// A booked ride whose driver is still reserved.
///
/// Holds the system mutably, so only one booking can be active at a time.
/// Dropping it without calling [`ActiveBooking::rate`] still releases the
/// driver.
#[derive(Debug)]
pub struct ActiveBooking<'a, S: RideStore> {
    system: &'a mut RideSharingSystem<S>,
    driver_index: usize,
    ride: Ride,
    persisted: bool,
}

impl<S: RideStore> ActiveBooking<'_, S> {
    pub fn ride(&self) -> &Ride {
        &self.ride
    }

    pub fn driver(&self) -> &Driver {
        &self.system.registry.list_drivers()[self.driver_index]
    }

    pub fn persisted(&self) -> bool {
        self.persisted
    }

    /// Apply the customer's rating and release the driver.
    ///
    /// Ratings outside `1.0..=5.0` are ignored; the driver is released either
    /// way.
    pub fn rate(mut self, rating: f64) -> BookingReceipt {
        self.system.transition(BookingPhase::Rating);
        let outcome = match self.system.registry.driver_at_mut(self.driver_index) {
            Some(driver) => update_rating(driver, rating),
            None => RatingOutcome::Ignored,
        };
        BookingReceipt {
            ride: self.ride.clone(),
            rating: outcome,
            driver_rating: self.driver().rating(),
            persisted: self.persisted,
        }
    }
}

impl<S: RideStore> Drop for ActiveBooking<'_, S> {
    fn drop(&mut self) {
        self.system.set_driver_available(self.driver_index, true);
        self.system.transition(BookingPhase::Idle);
    }
}

impl<S: RideStore> RideSharingSystem<S> {
    /// Book a ride for an authenticated customer.
    ///
    /// On success the matched driver is reserved, the ride is in the history
    /// and has been handed to the store. A store failure is logged and
    /// reported through [`ActiveBooking::persisted`] instead of failing the
    /// booking.
    pub fn book_ride(
        &mut self,
        customer_id: &str,
        password: &str,
        distance_km: f64,
    ) -> Result<ActiveBooking<'_, S>, BookingError> {
        match self.reserve_ride(customer_id, password, distance_km) {
            Ok((driver_index, ride, persisted)) => Ok(ActiveBooking {
                system: self,
                driver_index,
                ride,
                persisted,
            }),
            Err(error) => {
                info!(customer_id, %error, "booking abandoned");
                self.transition(BookingPhase::Idle);
                Err(error)
            }
        }
    }

    /// Book, rate and release in one call.
    pub fn book_and_rate(
        &mut self,
        customer_id: &str,
        password: &str,
        distance_km: f64,
        rating: f64,
    ) -> Result<BookingReceipt, BookingError> {
        Ok(self
            .book_ride(customer_id, password, distance_km)?
            .rate(rating))
    }

    fn reserve_ride(
        &mut self,
        customer_id: &str,
        password: &str,
        distance_km: f64,
    ) -> Result<(usize, Ride, bool), BookingError> {
        self.transition(BookingPhase::Authenticating);
        let customer_id = self
            .registry
            .authenticate_customer(customer_id, password)?
            .id()
            .to_string();

        self.transition(BookingPhase::Matching);
        let driver_index = self
            .matcher
            .find_available_driver(self.registry.list_drivers())
            .ok_or(BookingError::NoDriverAvailable)?;
        let driver_id = self
            .registry
            .driver_at(driver_index)
            .map(|driver| driver.id().to_string())
            .ok_or(BookingError::NoDriverAvailable)?;

        // Pricing validates the distance before anything is reserved.
        self.transition(BookingPhase::Faring);
        let ride = self.ledger.create_ride(&customer_id, &driver_id, distance_km)?;
        self.set_driver_available(driver_index, false);
        let persisted = self.ledger.persist(&ride).is_ok();

        self.transition(BookingPhase::Booked);
        info!(
            ride_id = ride.ride_id(),
            customer_id = %customer_id,
            driver_id = %driver_id,
            "ride booked"
        );
        Ok((driver_index, ride, persisted))
    }
}
