// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{write_indented, PipelineInfo, Provider};

/// Suppresses consecutive duplicates under an equivalence predicate.
///
/// Comparison is against the last *emitted* element, so a run of equivalent
/// values collapses to its first member. The first element always passes.
pub struct AdjacentDistinct<P: Provider, F> {
    upstream: P,
    equivalence: F,
    last_emitted: Option<P::Item>,
    current: Option<P::Item>,
}

impl<P, F> AdjacentDistinct<P, F>
where
    P: Provider,
    F: FnMut(&P::Item, &P::Item) -> bool,
{
    pub const fn new(upstream: P, equivalence: F) -> Self {
        Self {
            upstream,
            equivalence,
            last_emitted: None,
            current: None,
        }
    }
}

impl<P, F> Provider for AdjacentDistinct<P, F>
where
    P: Provider,
    P::Item: Clone,
    F: FnMut(&P::Item, &P::Item) -> bool,
{
    type Item = P::Item;

    fn advance(&mut self) -> bool {
        loop {
            match self.upstream.pull() {
                Some(value) => {
                    let duplicate = self
                        .last_emitted
                        .as_ref()
                        .is_some_and(|last| (self.equivalence)(last, &value));
                    if duplicate {
                        continue;
                    }
                    self.last_emitted = Some(value.clone());
                    self.current = Some(value);
                    return true;
                }
                None => {
                    self.current = None;
                    return false;
                }
            }
        }
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "AdjacentDistinct:");
        self.upstream.describe(out, depth + 1).add_stage()
    }
}
