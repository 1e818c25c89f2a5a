// Copyright 2025 The Rill Developers
// SPDX-License-Identifier: Apache-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use rill_stream::{FromIter, Stream};
use std::hint::black_box;

pub fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    let sizes = [10_000usize, 100_000usize, 1_000_000usize];

    for &size in &sizes {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("sample_100", size),
            &size,
            |bencher, &size| {
                bencher.iter_with_setup(
                    || Stream::from_provider(FromIter::new(0..size as i64)),
                    |mut stream| {
                        let sampled = stream.sample(100, 42).unwrap();
                        black_box(sampled);
                    },
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("random_element", size),
            &size,
            |bencher, &size| {
                bencher.iter_with_setup(
                    || Stream::from_provider(FromIter::new(0..size as i64)),
                    |mut stream| {
                        let picked = stream.random_element(42).unwrap();
                        black_box(picked);
                    },
                );
            },
        );
    }

    group.finish();
}
