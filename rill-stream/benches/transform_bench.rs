// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use rill_stream::{FromIter, Stream};
use std::hint::black_box;

fn numbers(size: usize) -> Stream<i64> {
    Stream::from_provider(FromIter::new(0..size as i64))
}

// Deterministic permutation of 0..size, unsorted enough to make sort work.
fn shuffled(size: usize) -> Stream<i64> {
    let size = size as i64;
    Stream::from_provider(FromIter::new((0..size).map(move |i| (i * 761) % size)))
}

pub fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");
    let sizes = [1_000usize, 10_000usize, 100_000usize];

    for &size in &sizes {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("filter_map", size),
            &size,
            |bencher, &size| {
                bencher.iter_with_setup(
                    || numbers(size),
                    |mut stream| {
                        let collected = stream
                            .filter(|n| n % 3 != 0)
                            .unwrap()
                            .map(|n| n * 2)
                            .unwrap()
                            .to_vec()
                            .unwrap();
                        black_box(collected);
                    },
                );
            },
        );

        group.bench_with_input(BenchmarkId::new("sort", size), &size, |bencher, &size| {
            bencher.iter_with_setup(
                || shuffled(size),
                |mut stream| {
                    let collected = stream.sort().unwrap().to_vec().unwrap();
                    black_box(collected);
                },
            );
        });

        group.bench_with_input(
            BenchmarkId::new("partial_sum", size),
            &size,
            |bencher, &size| {
                bencher.iter_with_setup(
                    || numbers(size),
                    |mut stream| {
                        let last = stream.partial_sum().unwrap().last().unwrap();
                        black_box(last);
                    },
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("overlap_sum", size),
            &size,
            |bencher, &size| {
                bencher.iter_with_setup(
                    || numbers(size),
                    |mut stream| {
                        let count = stream
                            .overlap::<4>()
                            .unwrap()
                            .map(|window| window.iter().sum::<i64>())
                            .unwrap()
                            .count()
                            .unwrap();
                        black_box(count);
                    },
                );
            },
        );
    }

    group.finish();
}
