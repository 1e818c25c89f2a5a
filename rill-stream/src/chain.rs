// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::VecDeque;

use rill_core::{write_indented, BoxProvider, PipelineInfo, Provider};

/// Concatenation over an ordered list of upstreams.
///
/// The front provider is drained and dropped before the next one starts;
/// exhaustion latches once the last part runs dry. Repeated `chain` calls
/// nest, so a part may itself be a chain.
pub struct Chain<T> {
    parts: VecDeque<BoxProvider<T>>,
    current: Option<T>,
    done: bool,
}

impl<T> Chain<T> {
    #[must_use]
    pub fn new(first: BoxProvider<T>, second: BoxProvider<T>) -> Self {
        Self {
            parts: VecDeque::from([first, second]),
            current: None,
            done: false,
        }
    }
}

impl<T> Provider for Chain<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        while let Some(front) = self.parts.front_mut() {
            if let Some(value) = front.pull() {
                self.current = Some(value);
                return true;
            }
            self.parts.pop_front();
        }
        self.done = true;
        self.current = None;
        false
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "Chain:");
        let mut info = PipelineInfo::default();
        for part in &self.parts {
            info = info + part.describe(out, depth + 1);
        }
        info.add_stage()
    }
}
