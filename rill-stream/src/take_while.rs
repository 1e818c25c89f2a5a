// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{write_indented, PipelineInfo, Provider};

/// Passes elements while a predicate holds, then exhausts for good.
///
/// The first failing element is discarded and the upstream is never
/// advanced again, even if the failing element would have been followed by
/// passing ones.
pub struct TakeWhile<P: Provider, F> {
    upstream: P,
    predicate: F,
    current: Option<P::Item>,
    done: bool,
}

impl<P, F> TakeWhile<P, F>
where
    P: Provider,
    F: FnMut(&P::Item) -> bool,
{
    pub const fn new(upstream: P, predicate: F) -> Self {
        Self {
            upstream,
            predicate,
            current: None,
            done: false,
        }
    }
}

impl<P, F> Provider for TakeWhile<P, F>
where
    P: Provider,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        match self.upstream.pull() {
            Some(value) if (self.predicate)(&value) => {
                self.current = Some(value);
                true
            }
            _ => {
                self.done = true;
                self.current = None;
                false
            }
        }
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "TakeWhile:");
        self.upstream.describe(out, depth + 1).add_stage()
    }
}
