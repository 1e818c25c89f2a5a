// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{write_indented, PipelineInfo, Provider};

/// A provider fed from a vector, yielding its elements front to back.
///
/// The test-side counterpart of the production sources: tests assemble exact
/// input sequences with it and hand them to operators or the set-operation
/// engine directly.
pub struct VecSource<T> {
    items: std::vec::IntoIter<T>,
    current: Option<T>,
}

impl<T> VecSource<T> {
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
            current: None,
        }
    }
}

impl<T> Provider for VecSource<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        self.current = self.items.next();
        self.current.is_some()
    }

    fn take(&mut self) -> Option<T> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "[vec source]");
        PipelineInfo::source()
    }
}
