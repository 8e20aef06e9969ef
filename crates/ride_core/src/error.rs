//! Error kinds surfaced by the registry, the booking workflow and the ride store.

use std::fmt;

/// Which registry namespace an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserKind {
    Driver,
    Customer,
}

impl fmt::Display for UserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserKind::Driver => f.write_str("driver"),
            UserKind::Customer => f.write_str("customer"),
        }
    }
}

/// Recoverable failures of the booking workflow.
///
/// Every variant leaves the system back in its idle phase with no driver
/// reserved and no ride id consumed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    #[error("Distance must be positive! (got {0})")]
    InvalidDistance(f64),
    /// Unknown id and wrong password share this variant.
    #[error("Invalid Credentials!")]
    InvalidCredentials,
    #[error("No Drivers Available!")]
    NoDriverAvailable,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("{kind} id '{id}' is already registered")]
    DuplicateId { kind: UserKind, id: String },
    #[error("{kind} id cannot be empty")]
    EmptyId { kind: UserKind },
}

/// Failure to append a ride to durable storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to open ride store: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write ride record: {0}")]
    Csv(#[from] csv::Error),
}
