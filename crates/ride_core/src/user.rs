//! Drivers, customers and the tagged [`User`] view over both.

use std::fmt;

use crate::error::UserKind;

/// Default rating a driver starts with before any ride.
pub const INITIAL_DRIVER_RATING: f64 = 5.0;

/// Plaintext credential. Masked in `Debug` output so it never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Exact, case-sensitive comparison.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("********")
    }
}

/// Identity and credentials shared by both user variants.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub password: Password,
}

impl Profile {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            password: Password::new(password),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub(crate) profile: Profile,
    pub(crate) available: bool,
    pub(crate) rating: f64,
    pub(crate) total_rides: u32,
}

impl Driver {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            available: true,
            rating: INITIAL_DRIVER_RATING,
            total_rides: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.profile.id
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn phone(&self) -> &str {
        &self.profile.phone
    }

    /// False exactly while the driver is reserved by an active booking.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Running average of every accepted rating, seeded at 5.0.
    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Number of ratings folded into [`Driver::rating`].
    pub fn total_rides(&self) -> u32 {
        self.total_rides
    }

    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub(crate) profile: Profile,
}

impl Customer {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    pub fn id(&self) -> &str {
        &self.profile.id
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn phone(&self) -> &str {
        &self.profile.phone
    }
}

/// Borrowed view over either kind of registered user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum User<'a> {
    Driver(&'a Driver),
    Customer(&'a Customer),
}

impl<'a> User<'a> {
    pub fn kind(&self) -> UserKind {
        match self {
            User::Driver(_) => UserKind::Driver,
            User::Customer(_) => UserKind::Customer,
        }
    }

    pub fn id(&self) -> &'a str {
        match *self {
            User::Driver(driver) => driver.id(),
            User::Customer(customer) => customer.id(),
        }
    }

    /// One-line, human readable summary used by the admin listings.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for User<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            User::Driver(driver) => write!(
                f,
                "Driver ID: {} | Name: {} | Rating: {:.2} | Available: {}",
                driver.id(),
                driver.name(),
                driver.rating(),
                if driver.is_available() { "Yes" } else { "No" }
            ),
            User::Customer(customer) => write!(
                f,
                "Customer ID: {} | Name: {}",
                customer.id(),
                customer.name()
            ),
        }
    }
}
