use std::fmt;

/// Lifecycle of a ride. Rides are recorded once they are complete, so this
/// has a single state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RideStatus {
    #[default]
    Completed,
}

impl RideStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RideStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for RideStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One booked ride. Immutable once created by the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    pub(crate) ride_id: String,
    pub(crate) customer_id: String,
    pub(crate) driver_id: String,
    pub(crate) distance_km: f64,
    pub(crate) fare: f64,
    pub(crate) status: RideStatus,
}

impl Ride {
    pub fn ride_id(&self) -> &str {
        &self.ride_id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn driver_id(&self) -> &str {
        &self.driver_id
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn fare(&self) -> f64 {
        self.fare
    }

    pub fn status(&self) -> RideStatus {
        self.status
    }

    /// Fields in storage order: `rideID,customerID,driverID,distance,fare,status`.
    pub fn to_record(&self) -> [String; 6] {
        [
            self.ride_id.clone(),
            self.customer_id.clone(),
            self.driver_id.clone(),
            self.distance_km.to_string(),
            self.fare.to_string(),
            self.status.to_string(),
        ]
    }
}

impl fmt::Display for Ride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ride ID: {}", self.ride_id)?;
        writeln!(f, "Customer ID: {}", self.customer_id)?;
        writeln!(f, "Driver ID: {}", self.driver_id)?;
        writeln!(f, "Distance: {} km", self.distance_km)?;
        writeln!(f, "Fare: \u{20b9}{}", self.fare)?;
        write!(f, "Status: {}", self.status)
    }
}
