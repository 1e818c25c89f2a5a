// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{write_indented, PipelineInfo, Provider};

/// Emits the running accumulation of the upstream.
///
/// The first element passes through unchanged; each later output is
/// `combine(&running, &next)`. The default combiner at the facade is
/// addition, giving the classic prefix-sum stream.
pub struct PartialSum<P: Provider, F> {
    upstream: P,
    combine: F,
    running: Option<P::Item>,
    current: Option<P::Item>,
}

impl<P, F> PartialSum<P, F>
where
    P: Provider,
    F: FnMut(&P::Item, &P::Item) -> P::Item,
{
    pub const fn new(upstream: P, combine: F) -> Self {
        Self {
            upstream,
            combine,
            running: None,
            current: None,
        }
    }
}

impl<P, F> Provider for PartialSum<P, F>
where
    P: Provider,
    P::Item: Clone,
    F: FnMut(&P::Item, &P::Item) -> P::Item,
{
    type Item = P::Item;

    fn advance(&mut self) -> bool {
        match self.upstream.pull() {
            Some(value) => {
                let total = match self.running.take() {
                    Some(running) => (self.combine)(&running, &value),
                    None => value,
                };
                self.current = Some(total.clone());
                self.running = Some(total);
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
        write_indented(out, depth, "PartialSum:");
        self.upstream.describe(out, depth + 1).add_stage()
    }
}
