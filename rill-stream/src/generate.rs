// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{write_indented, PipelineInfo, Provider};

/// Source driven by a zero-argument callable.
///
/// `None` from the callable is the end-of-range signal, not an error: the
/// provider translates it into sticky exhaustion and never invokes the
/// callable again.
pub struct Generate<T, F> {
    generator: F,
    current: Option<T>,
    done: bool,
}

impl<T, F> Generate<T, F>
where
    F: FnMut() -> Option<T>,
{
    pub const fn new(generator: F) -> Self {
        Self {
            generator,
            current: None,
            done: false,
        }
    }
}

impl<T, F> Provider for Generate<T, F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.current = (self.generator)();
        if self.current.is_none() {
            self.done = true;
        }
        self.current.is_some()
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "[generator]");
        PipelineInfo::source()
    }
}
