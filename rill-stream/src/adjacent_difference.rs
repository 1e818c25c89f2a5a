// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{write_indented, PipelineInfo, Provider};

/// Combines each element with its predecessor over a sliding pair.
///
/// On input `[a0, a1, …, an]` the output is `[f(a1, a0), f(a2, a1), …]`;
/// fewer than two upstream elements yield nothing. The default combiner at
/// the facade is subtraction.
pub struct AdjacentDifference<P: Provider, F, U> {
    upstream: P,
    combine: F,
    previous: Option<P::Item>,
    current: Option<U>,
}

impl<P, F, U> AdjacentDifference<P, F, U>
where
    P: Provider,
    F: FnMut(&P::Item, &P::Item) -> U,
{
    pub const fn new(upstream: P, combine: F) -> Self {
        Self {
            upstream,
            combine,
            previous: None,
            current: None,
        }
    }
}

impl<P, F, U> Provider for AdjacentDifference<P, F, U>
where
    P: Provider,
    F: FnMut(&P::Item, &P::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) -> bool {
        if self.previous.is_none() {
            self.previous = self.upstream.pull();
            if self.previous.is_none() {
                return false;
            }
        }
        match self.upstream.pull() {
            Some(value) => {
                let previous = self
                    .previous
                    .as_ref()
                    .expect("previous element retained across advances");
                self.current = Some((self.combine)(&value, previous));
                self.previous = Some(value);
                true
            }
            None => {
                self.current = None;
                false
            }
        }
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "AdjacentDifference:");
        self.upstream.describe(out, depth + 1).add_stage()
    }
}
