//! Test helpers for common test setup and utilities.
//!
//! This module provides shared fixtures so tests don't each rebuild the same
//! registry by hand.

use crate::matching::MatchingPolicyKind;
use crate::pricing::PricingConfig;
use crate::store::MemoryRideStore;
use crate::system::RideSharingSystem;

/// Password shared by every fixture user.
pub const TEST_PASSWORD: &str = "secret";

/// Customer registered by [`seeded_system`].
pub const TEST_CUSTOMER_ID: &str = "C1";

/// Empty in-memory system with default pricing and first-registered matching.
pub fn memory_system() -> RideSharingSystem<MemoryRideStore> {
    memory_system_with(MatchingPolicyKind::FirstRegistered)
}

pub fn memory_system_with(matching: MatchingPolicyKind) -> RideSharingSystem<MemoryRideStore> {
    RideSharingSystem::with_store(MemoryRideStore::new(), PricingConfig::default(), matching)
}

/// In-memory system with customer [`TEST_CUSTOMER_ID`] and the given drivers,
/// registered in order, all using [`TEST_PASSWORD`].
///
/// # Panics
///
/// Panics if `driver_ids` contains duplicates.
pub fn seeded_system(driver_ids: &[&str]) -> RideSharingSystem<MemoryRideStore> {
    let mut system = memory_system();
    system
        .register_customer(TEST_CUSTOMER_ID, "Test Customer", "555-0000", TEST_PASSWORD)
        .expect("fixture customer should register");
    for id in driver_ids {
        system
            .register_driver(id, &format!("Driver {id}"), "555-0001", TEST_PASSWORD)
            .expect("fixture driver ids should be unique");
    }
    system
}
