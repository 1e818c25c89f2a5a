// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{write_indented, PipelineInfo, Provider};

/// Skips leading elements while a predicate holds, then passes the rest.
pub struct DropWhile<P: Provider, F> {
    upstream: P,
    predicate: F,
    current: Option<P::Item>,
    dropping: bool,
}

impl<P, F> DropWhile<P, F>
where
    P: Provider,
    F: FnMut(&P::Item) -> bool,
{
    pub const fn new(upstream: P, predicate: F) -> Self {
        Self {
            upstream,
            predicate,
            current: None,
            dropping: true,
        }
    }
}

impl<P, F> Provider for DropWhile<P, F>
where
    P: Provider,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    fn advance(&mut self) -> bool {
        if self.dropping {
            self.dropping = false;
            loop {
                match self.upstream.pull() {
                    Some(value) if (self.predicate)(&value) => {}
                    Some(value) => {
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
        self.current = self.upstream.pull();
        self.current.is_some()
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "DropWhile:");
        self.upstream.describe(out, depth + 1).add_stage()
    }
}
