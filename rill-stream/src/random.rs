// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rand::distr::Distribution;
use rand::Rng;

use rill_core::{write_indented, PipelineInfo, Provider};

/// Infinite source sampling a `rand` distribution with an owned engine.
///
/// The construction facade pairs this with `StdRng`, either OS-seeded or
/// seeded from a caller-supplied value for reproducible streams.
pub struct RandomSource<T, D, R> {
    distribution: D,
    rng: R,
    current: Option<T>,
}

impl<T, D, R> RandomSource<T, D, R>
where
    D: Distribution<T>,
    R: Rng,
{
    pub const fn new(distribution: D, rng: R) -> Self {
        Self {
            distribution,
            rng,
            current: None,
        }
    }
}

impl<T, D, R> Provider for RandomSource<T, D, R>
where
    D: Distribution<T>,
    R: Rng,
{
    type Item = T;

    fn advance(&mut self) -> bool {
        self.current = Some(self.distribution.sample(&mut self.rng));
        true
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "[random source]");
        PipelineInfo::source()
    }
}
