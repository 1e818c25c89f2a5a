// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{write_indented, PipelineInfo, Provider};

/// Source yielding clones of one value forever.
///
/// Infinite: combine with `limit`, `take_while` or `zip` before any draining
/// operation.
pub struct Repeat<T> {
    value: T,
    current: Option<T>,
}

impl<T> Repeat<T> {
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            current: None,
        }
    }
}

impl<T: Clone> Provider for Repeat<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        self.current = Some(self.value.clone());
        true
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "[repeat]");
        PipelineInfo::source()
    }
}
