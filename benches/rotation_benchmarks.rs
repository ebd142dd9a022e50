//! Performance benchmarks for the shift rotation engine.
//!
//! Lookups are pure arithmetic over a four-entry table and should stay in
//! the tens of nanoseconds; validation adds a keyword scan of the note.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use shift_rota::config::PlantConfig;
use shift_rota::models::Employee;
use shift_rota::rotation::Rotation;
use shift_rota::validation::ConstraintValidator;

fn anchor_monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Benchmark: forward lookup for dates near and far from the anchor.
fn bench_slot_for_group(c: &mut Criterion) {
    let rotation = Rotation::default();
    let mut group = c.benchmark_group("slot_for_group");

    for weeks in [0i64, 52, -52, 52 * 300] {
        let date = anchor_monday() + Duration::weeks(weeks);
        group.bench_with_input(BenchmarkId::from_parameter(weeks), &date, |b, date| {
            b.iter(|| rotation.slot_for_group(black_box("C"), black_box(*date)))
        });
    }

    group.finish();
}

/// Benchmark: reverse lookup by id and by display name.
fn bench_group_for_slot(c: &mut Criterion) {
    let rotation = Rotation::default();
    let date = anchor_monday() + Duration::days(1000);
    let mut group = c.benchmark_group("group_for_slot");

    for key in ["Night", "Afternoon shift"] {
        group.bench_with_input(BenchmarkId::from_parameter(key), &key, |b, key| {
            b.iter(|| rotation.group_for_slot(black_box(key), black_box(date)))
        });
    }

    group.finish();
}

/// Benchmark: live-clock resolution.
fn bench_active_group(c: &mut Criterion) {
    let rotation = Rotation::default();
    let now = Utc.with_ymd_and_hms(2026, 3, 29, 1, 30, 0).unwrap();

    c.bench_function("active_group", |b| {
        b.iter(|| rotation.active_group(black_box(now)))
    });
}

/// Benchmark: validating a year of daily assignments.
fn bench_can_assign_year(c: &mut Criterion) {
    let validator = ConstraintValidator::new(&PlantConfig::default());
    let employee = Employee::new("emp_001", "Rossi Mario")
        .with_note("Part time dal 2023, no notte, idoneo con limitazioni (rischio chimico)");
    let days: Vec<NaiveDate> = (0..365)
        .map(|d| anchor_monday() + Duration::days(d))
        .collect();

    let mut group = c.benchmark_group("can_assign");
    group.throughput(Throughput::Elements(days.len() as u64));
    group.bench_function("year", |b| {
        b.iter(|| {
            days.iter()
                .filter(|day| validator.can_assign(&employee, "B", **day).allowed)
                .count()
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_slot_for_group,
    bench_group_for_slot,
    bench_active_group,
    bench_can_assign_year
);
criterion_main!(benches);
