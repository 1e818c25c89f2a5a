// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cmp::Ordering;

use rill_core::{write_indented, PipelineInfo, Provider};

/// Buffering provider yielding each comparator-distinct element once.
///
/// The first advance drains the upstream, sorts it and collapses runs of
/// comparator-equal elements, keeping the first of each run. The output is
/// sorted ascending, not in first-occurrence order. Requires a finite
/// upstream.
pub struct Distinct<P: Provider, C> {
    upstream: Option<P>,
    comparator: C,
    buffered: std::vec::IntoIter<P::Item>,
    current: Option<P::Item>,
}

impl<P, C> Distinct<P, C>
where
    P: Provider,
    C: FnMut(&P::Item, &P::Item) -> Ordering,
{
    pub fn new(upstream: P, comparator: C) -> Self {
        Self {
            upstream: Some(upstream),
            comparator,
            buffered: Vec::new().into_iter(),
            current: None,
        }
    }
}

impl<P, C> Provider for Distinct<P, C>
where
    P: Provider,
    C: FnMut(&P::Item, &P::Item) -> Ordering,
{
    type Item = P::Item;

    fn advance(&mut self) -> bool {
        if let Some(mut upstream) = self.upstream.take() {
            let mut items = Vec::new();
            while let Some(value) = upstream.pull() {
                items.push(value);
            }
            items.sort_by(|a, b| (self.comparator)(a, b));
            items.dedup_by(|a, b| (self.comparator)(a, b) == Ordering::Equal);
            self.buffered = items.into_iter();
        }
        self.current = self.buffered.next();
        self.current.is_some()
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "Distinct:");
        match &self.upstream {
            Some(upstream) => upstream.describe(out, depth + 1).add_stage(),
            None => {
                write_indented(out, depth + 1, "[distinct buffer]");
                PipelineInfo::source().add_stage()
            }
        }
    }
}
