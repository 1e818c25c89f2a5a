// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{write_indented, PipelineInfo, Provider};

/// Forwards elements unchanged, invoking an observer on each as it passes.
pub struct Peek<P: Provider, F> {
    upstream: P,
    observer: F,
    current: Option<P::Item>,
}

impl<P, F> Peek<P, F>
where
    P: Provider,
    F: FnMut(&P::Item),
{
    pub const fn new(upstream: P, observer: F) -> Self {
        Self {
            upstream,
            observer,
            current: None,
        }
    }
}

impl<P, F> Provider for Peek<P, F>
where
    P: Provider,
    F: FnMut(&P::Item),
{
    type Item = P::Item;

    fn advance(&mut self) -> bool {
        self.current = self.upstream.pull();
        if let Some(value) = &self.current {
            (self.observer)(value);
        }
        self.current.is_some()
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "Peek:");
        self.upstream.describe(out, depth + 1).add_stage()
    }
}
