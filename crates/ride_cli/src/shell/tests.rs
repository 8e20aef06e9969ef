use ride_core::test_helpers::{memory_system, seeded_system};

use super::*;

fn run_script<S: RideStore>(system: &mut RideSharingSystem<S>, script: &str) -> String {
    let mut out = Vec::new();
    Shell::new(script.as_bytes(), &mut out)
        .run(system)
        .expect("in-memory io should not fail");
    String::from_utf8(out).expect("utf8 output")
}

#[test]
fn register_then_book_then_list() {
    let mut system = memory_system();
    let script = "1 D1 Asha 555-0100 pw\n\
                  2 C1 Ben 555-0101 secret\n\
                  3 C1 secret 10 4\n\
                  4\n\
                  5\n\
                  6\n";

    let output = run_script(&mut system, script);

    assert!(output.contains("Driver Registered Successfully!"));
    assert!(output.contains("Customer Registered Successfully!"));
    assert!(output.contains("Login Successful!"));
    assert!(output.contains("Ride Booked Successfully!"));
    assert!(output.contains("Fare: \u{20b9}170"));
    assert!(output.contains("Driver ID: D1 | Name: Asha | Rating: 4.00 | Available: Yes"));
    assert!(output.contains("--- Ride History ---\n\nRide ID: R1"));
    assert!(output.ends_with("Exiting System...\n"));
    assert_eq!(system.ledger().store().lines(), ["R1,C1,D1,10,170,Completed"]);
}

#[test]
fn wrong_password_is_reported_without_booking() {
    let mut system = seeded_system(&["D1"]);

    let output = run_script(&mut system, "3 C1 wrong\n6\n");

    assert!(output.contains("Invalid Credentials!"));
    assert!(!output.contains("Enter Distance"));
    assert!(system.ride_history().is_empty());
}

#[test]
fn booking_without_drivers_reports_and_continues() {
    let mut system = seeded_system(&[]);

    let output = run_script(&mut system, "3 C1 secret 5\n6\n");

    assert!(output.contains("No Drivers Available!"));
    assert!(output.ends_with("Exiting System...\n"));
}

#[test]
fn bad_distance_is_an_error_and_driver_stays_free() {
    let mut system = seeded_system(&["D1"]);

    let output = run_script(&mut system, "3 C1 secret -4\n3 C1 secret far\n6\n");

    assert!(output.contains("Error: Distance must be positive!"));
    assert!(output.contains("Error: 'far' is not a distance"));
    assert!(system.list_drivers()[0].is_available());
    assert!(system.ride_history().is_empty());
}

#[test]
fn unreadable_rating_is_ignored_and_driver_released() {
    let mut system = seeded_system(&["D1"]);

    run_script(&mut system, "3 C1 secret 2 great\n6\n");

    let driver = &system.list_drivers()[0];
    assert!(driver.is_available());
    assert_eq!(driver.total_rides(), 0);
    assert_eq!(system.ride_history().len(), 1);
}

#[test]
fn duplicate_registration_and_bad_choice_are_reported() {
    let mut system = memory_system();

    let output = run_script(&mut system, "1 D1 A 1 p\n1 D1 B 2 q\n9\nmenu\n6\n");

    assert!(output.contains("Error: driver id 'D1' is already registered"));
    assert_eq!(output.matches("Invalid Choice!").count(), 2);
    assert_eq!(system.list_drivers()[0].name(), "A");
}

#[test]
fn end_of_input_exits_cleanly() {
    let mut system = memory_system();

    let output = run_script(&mut system, "1 D1 Asha");

    assert!(output.ends_with("Exiting System...\n"));
    assert_eq!(system.registry().driver_count(), 0);
}
