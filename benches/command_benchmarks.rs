//! Performance benchmarks for command handling.
//!
//! These benchmarks measure:
//! - Line parsing
//! - Adding phones to a growing address book
//! - Listing address books of different sizes

use addressbook_bot::{parse_input, CommandExecutor};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build an executor holding `count` contacts with two phones each.
fn populated_executor(count: usize) -> CommandExecutor {
    let mut executor = CommandExecutor::new();
    for i in 0..count {
        let line = format!("add Contact{} {:010} {:010}", i, i, i + 1);
        let parsed = parse_input(&line).unwrap();
        executor.execute(&parsed);
    }
    executor
}

fn bench_parse_input(c: &mut Criterion) {
    c.bench_function("parse_input", |b| {
        b.iter(|| parse_input(black_box("change John 1234567890 1112223333")))
    });
}

fn bench_add_phone(c: &mut Criterion) {
    let mut executor = populated_executor(1_000);
    let parsed = parse_input("add Contact500 5555555555").unwrap();

    c.bench_function("add_phone_existing_contact", |b| {
        b.iter(|| executor.execute(black_box(&parsed)))
    });
}

fn bench_show_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("show_all");
    let parsed = parse_input("all").unwrap();

    for size in [10usize, 100, 1_000] {
        let mut executor = populated_executor(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| executor.execute(black_box(&parsed)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_input, bench_add_phone, bench_show_all);
criterion_main!(benches);
