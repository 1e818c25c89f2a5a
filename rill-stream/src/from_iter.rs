// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::iter::Fuse;

use rill_core::{write_indented, PipelineInfo, Provider};

/// Source backed by any iterator.
///
/// The iterator is fused so a misbehaving upstream cannot resurrect the
/// stream after reporting exhaustion.
pub struct FromIter<I: Iterator> {
    items: Fuse<I>,
    current: Option<I::Item>,
}

impl<I: Iterator> FromIter<I> {
    pub fn new(items: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            items: items.into_iter().fuse(),
            current: None,
        }
    }
}

impl<I: Iterator> Provider for FromIter<I> {
    type Item = I::Item;

    fn advance(&mut self) -> bool {
        self.current = self.items.next();
        self.current.is_some()
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "[iterator source]");
        PipelineInfo::source()
    }
}
