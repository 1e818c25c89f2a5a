// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use rill_core::Provider;
use rill_merge::{difference, intersection, merge, symmetric_difference, union};
use rill_test_utils::VecSource;
use std::hint::black_box;

// Partially overlapping sorted inputs so every strategy branch is exercised.
fn multiples_of(step: i32, size: usize) -> VecSource<i32> {
    VecSource::new((0..size as i32).map(|i| i * step).collect())
}

fn drain_all<P: Provider>(mut provider: P) {
    while let Some(value) = provider.pull() {
        black_box(value);
    }
}

pub fn bench_set_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_operations");
    let sizes = [1_000usize, 10_000usize, 100_000usize];

    for &size in &sizes {
        group.throughput(Throughput::Elements((size * 2) as u64));

        group.bench_with_input(BenchmarkId::new("merge", size), &size, |bencher, &size| {
            bencher.iter_with_setup(
                || (multiples_of(2, size), multiples_of(3, size)),
                |(left, right)| drain_all(merge(left, right, i32::cmp)),
            );
        });

        group.bench_with_input(BenchmarkId::new("union", size), &size, |bencher, &size| {
            bencher.iter_with_setup(
                || (multiples_of(2, size), multiples_of(3, size)),
                |(left, right)| drain_all(union(left, right, i32::cmp)),
            );
        });

        group.bench_with_input(
            BenchmarkId::new("intersection", size),
            &size,
            |bencher, &size| {
                bencher.iter_with_setup(
                    || (multiples_of(2, size), multiples_of(3, size)),
                    |(left, right)| drain_all(intersection(left, right, i32::cmp)),
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("difference", size),
            &size,
            |bencher, &size| {
                bencher.iter_with_setup(
                    || (multiples_of(2, size), multiples_of(3, size)),
                    |(left, right)| drain_all(difference(left, right, i32::cmp)),
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("symmetric_difference", size),
            &size,
            |bencher, &size| {
                bencher.iter_with_setup(
                    || (multiples_of(2, size), multiples_of(3, size)),
                    |(left, right)| drain_all(symmetric_difference(left, right, i32::cmp)),
                );
            },
        );
    }

    group.finish();
}
