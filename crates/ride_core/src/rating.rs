//! Running-average driver ratings.

use tracing::{debug, warn};

use crate::user::Driver;

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// What happened to a submitted rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingOutcome {
    /// Folded into the driver's average; carries the new average.
    Applied { rating: f64 },
    /// Outside `MIN_RATING..=MAX_RATING` (or NaN) and dropped.
    Ignored,
}

/// Fold `new_rating` into the driver's cumulative average.
///
/// `rating' = (rating * total_rides + new_rating) / (total_rides + 1)`.
/// Out-of-range values are a silent no-op, not an error.
pub fn update_rating(driver: &mut Driver, new_rating: f64) -> RatingOutcome {
    if !(MIN_RATING..=MAX_RATING).contains(&new_rating) {
        warn!(driver_id = driver.id(), new_rating, "rating out of range, ignored");
        return RatingOutcome::Ignored;
    }

    let rides = f64::from(driver.total_rides);
    driver.rating = (driver.rating * rides + new_rating) / (rides + 1.0);
    driver.total_rides += 1;
    debug!(
        driver_id = driver.id(),
        rating = driver.rating,
        total_rides = driver.total_rides,
        "driver rating updated"
    );
    RatingOutcome::Applied {
        rating: driver.rating,
    }
}
