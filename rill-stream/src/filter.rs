// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{write_indented, PipelineInfo, Provider};

/// Keeps only upstream elements satisfying a predicate.
pub struct Filter<P: Provider, F> {
    upstream: P,
    predicate: F,
    current: Option<P::Item>,
}

impl<P, F> Filter<P, F>
where
    P: Provider,
    F: FnMut(&P::Item) -> bool,
{
    pub const fn new(upstream: P, predicate: F) -> Self {
        Self {
            upstream,
            predicate,
            current: None,
        }
    }
}

impl<P, F> Provider for Filter<P, F>
where
    P: Provider,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    fn advance(&mut self) -> bool {
        loop {
            match self.upstream.pull() {
                Some(value) if (self.predicate)(&value) => {
                    self.current = Some(value);
                    return true;
                }
                Some(_) => {}
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
        write_indented(out, depth, "Filter:");
        self.upstream.describe(out, depth + 1).add_stage()
    }
}
