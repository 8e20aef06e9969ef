pub mod booking;
pub mod config;
pub mod error;
pub mod ledger;
pub mod matching;
pub mod pricing;
pub mod rating;
pub mod registry;
pub mod ride;
pub mod store;
pub mod system;
pub mod user;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use booking::{ActiveBooking, BookingPhase, BookingReceipt};
pub use config::SystemConfig;
pub use error::{BookingError, RegistryError, StoreError, UserKind};
pub use ride::{Ride, RideStatus};
pub use system::RideSharingSystem;
