// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{write_indented, PipelineInfo, Provider};

/// Index-based selection: emits upstream positions `start`, `start + step`,
/// `start + 2·step`, … while they stay below `end`.
///
/// `start` is inclusive, `end` exclusive; `end == None` means unbounded.
/// `start >= end` yields an empty stream. The upstream is never pulled past
/// the last selected position.
pub struct Slice<P: Provider> {
    upstream: P,
    next_emit: usize,
    end: Option<usize>,
    step: usize,
    position: usize,
    current: Option<P::Item>,
    done: bool,
}

impl<P: Provider> Slice<P> {
    /// # Panics
    ///
    /// Panics when `step == 0`.
    pub fn new(upstream: P, start: usize, end: Option<usize>, step: usize) -> Self {
        assert!(step > 0, "slice: step must be positive, got {step}");
        Self {
            upstream,
            next_emit: start,
            end,
            step,
            position: 0,
            current: None,
            done: false,
        }
    }
}

impl<P: Provider> Provider for Slice<P> {
    type Item = P::Item;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        loop {
            if self.end.is_some_and(|end| self.next_emit >= end) {
                self.done = true;
                self.current = None;
                return false;
            }
            match self.upstream.pull() {
                Some(value) => {
                    let index = self.position;
                    self.position += 1;
                    if index == self.next_emit {
                        self.next_emit += self.step;
                        self.current = Some(value);
                        return true;
                    }
                }
                None => {
                    self.done = true;
                    self.current = None;
                    return false;
                }
            }
        }
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "Slice:");
        self.upstream.describe(out, depth + 1).add_stage()
    }
}
