// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{write_indented, PipelineInfo, Provider};

/// Source unrolling an order-N recurrence relation.
///
/// The first N advances emit the seed values in order; afterwards each
/// advance applies the step function to the window of the N most recent
/// values, rotates the window and emits the new value. Infinite.
///
/// Order-1 recurrences are the classic `iterate` source: the construction
/// facade builds those through this provider.
pub struct Recurrence<T, F, const N: usize> {
    window: [T; N],
    step: F,
    seeds_emitted: usize,
    current: Option<T>,
}

impl<T, F, const N: usize> Recurrence<T, F, N>
where
    F: FnMut(&[T; N]) -> T,
{
    /// # Panics
    ///
    /// Panics when `N == 0`; a recurrence needs at least one seed.
    pub fn new(seeds: [T; N], step: F) -> Self {
        assert!(N > 0, "recurrence: order must be at least 1, got {N}");
        Self {
            window: seeds,
            step,
            seeds_emitted: 0,
            current: None,
        }
    }
}

impl<T, F, const N: usize> Provider for Recurrence<T, F, N>
where
    T: Clone,
    F: FnMut(&[T; N]) -> T,
{
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.seeds_emitted < N {
            self.current = Some(self.window[self.seeds_emitted].clone());
            self.seeds_emitted += 1;
        } else {
            let next = (self.step)(&self.window);
            self.window.rotate_left(1);
            self.window[N - 1] = next.clone();
            self.current = Some(next);
        }
        true
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "[recurrence]");
        PipelineInfo::source()
    }
}
