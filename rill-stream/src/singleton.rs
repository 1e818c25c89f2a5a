// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{write_indented, PipelineInfo, Provider};

/// Source holding exactly one element, moved out on the first advance.
pub struct Singleton<T> {
    value: Option<T>,
    current: Option<T>,
}

impl<T> Singleton<T> {
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value: Some(value),
            current: None,
        }
    }
}

impl<T> Provider for Singleton<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        self.current = self.value.take();
        self.current.is_some()
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "[singleton]");
        PipelineInfo::source()
    }
}
