// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{write_indented, PipelineInfo, Provider};

/// Transforms every upstream element; the element type may change.
pub struct Map<P, F, U> {
    upstream: P,
    transform: F,
    current: Option<U>,
}

impl<P, F, U> Map<P, F, U>
where
    P: Provider,
    F: FnMut(P::Item) -> U,
{
    pub const fn new(upstream: P, transform: F) -> Self {
        Self {
            upstream,
            transform,
            current: None,
        }
    }
}

impl<P, F, U> Provider for Map<P, F, U>
where
    P: Provider,
    F: FnMut(P::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) -> bool {
        self.current = self.upstream.pull().map(&mut self.transform);
        self.current.is_some()
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "Map:");
        self.upstream.describe(out, depth + 1).add_stage()
    }
}
