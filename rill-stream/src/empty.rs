// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::marker::PhantomData;

use rill_core::{write_indented, PipelineInfo, Provider};

/// Source with no elements; every advance reports exhaustion.
pub struct Empty<T> {
    _marker: PhantomData<T>,
}

impl<T> Empty<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Provider for Empty<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        false
    }

    fn take(&mut self) -> Option<Self::Item> {
        None
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "[empty stream]");
        PipelineInfo::source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_never_advances() {
        let mut empty = Empty::<i32>::new();
        assert!(!empty.advance());
        assert_eq!(empty.take(), None);
        assert!(!empty.advance());
    }
}
