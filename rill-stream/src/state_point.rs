// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{write_indented, PipelineInfo, Provider};

/// Buffering checkpoint: materializes the upstream once, then replays it.
///
/// The first advance drains the whole upstream into a buffer and drops the
/// upstream, so any side effects above this point (peek observers, eager
/// generators) happen exactly once no matter how the buffered tail is
/// consumed. Requires a finite upstream.
pub struct StatePoint<P: Provider> {
    upstream: Option<P>,
    buffered: std::vec::IntoIter<P::Item>,
    current: Option<P::Item>,
}

impl<P: Provider> StatePoint<P> {
    pub fn new(upstream: P) -> Self {
        Self {
            upstream: Some(upstream),
            buffered: Vec::new().into_iter(),
            current: None,
        }
    }
}

impl<P: Provider> Provider for StatePoint<P> {
    type Item = P::Item;

    fn advance(&mut self) -> bool {
        if let Some(mut upstream) = self.upstream.take() {
            let mut items = Vec::new();
            while let Some(value) = upstream.pull() {
                items.push(value);
            }
            self.buffered = items.into_iter();
        }
        self.current = self.buffered.next();
        self.current.is_some()
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "StatePoint:");
        match &self.upstream {
            Some(upstream) => upstream.describe(out, depth + 1).add_stage(),
            None => {
                write_indented(out, depth + 1, "[checkpoint buffer]");
                PipelineInfo::source().add_stage()
            }
        }
    }
}
