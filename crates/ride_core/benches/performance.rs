//! Performance benchmarks for ride_core using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ride_core::matching::{FirstRegisteredMatching, LowestIdMatching, MatchingPolicy};
use ride_core::test_helpers::{seeded_system, TEST_CUSTOMER_ID, TEST_PASSWORD};

fn driver_ids(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("D{i:05}")).collect()
}

fn bench_booking_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("booking_cycle");
    for drivers in [10, 100, 1_000] {
        let ids = driver_ids(drivers);
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        group.bench_with_input(BenchmarkId::from_parameter(drivers), &id_refs, |b, ids| {
            let mut system = seeded_system(ids);
            b.iter(|| {
                black_box(
                    system
                        .book_and_rate(TEST_CUSTOMER_ID, TEST_PASSWORD, 7.5, 4.0)
                        .expect("a driver is always free"),
                );
            });
        });
    }
    group.finish();
}

fn bench_matching_policies(c: &mut Criterion) {
    let ids = driver_ids(1_000);
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let system = seeded_system(&id_refs);
    let drivers = system.list_drivers();

    let mut group = c.benchmark_group("matching_policies");
    group.bench_function("first_registered", |b| {
        b.iter(|| black_box(FirstRegisteredMatching.find_available_driver(drivers)))
    });
    group.bench_function("lowest_id", |b| {
        b.iter(|| black_box(LowestIdMatching.find_available_driver(drivers)))
    });
    group.finish();
}

criterion_group!(benches, bench_booking_cycle, bench_matching_policies);
criterion_main!(benches);
