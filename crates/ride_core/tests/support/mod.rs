#![allow(dead_code)]

use std::fs;
use std::path::Path;

use ride_core::store::FileRideStore;
use ride_core::{RideSharingSystem, SystemConfig};
use ride_core::test_helpers::{TEST_CUSTOMER_ID, TEST_PASSWORD};

/// File-backed system writing to `path`, with customer `C1` and the given drivers.
pub fn file_system(path: &Path, driver_ids: &[&str]) -> RideSharingSystem<FileRideStore> {
    let config = SystemConfig::default().with_rides_path(path);
    let mut system = RideSharingSystem::from_config(&config);
    system
        .register_customer(TEST_CUSTOMER_ID, "Test Customer", "555-0000", TEST_PASSWORD)
        .expect("customer");
    for id in driver_ids {
        system
            .register_driver(id, "Driver", "555-0001", TEST_PASSWORD)
            .expect("driver");
    }
    system
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("ride file should exist")
        .lines()
        .map(str::to_string)
        .collect()
}
