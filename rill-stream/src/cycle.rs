// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{write_indented, PipelineInfo, Provider};

/// Source cycling through an owned container a fixed number of rounds.
///
/// `times == 0` means cycle forever, matching the construction facade's
/// `cycle` / `cycle_n` split. An empty container is exhausted immediately
/// regardless of the round count.
pub struct Cycle<T> {
    items: Vec<T>,
    index: usize,
    remaining: Option<usize>,
    current: Option<T>,
}

impl<T> Cycle<T> {
    pub fn new(items: Vec<T>, times: usize) -> Self {
        Self {
            items,
            index: 0,
            remaining: (times > 0).then_some(times),
            current: None,
        }
    }
}

impl<T: Clone> Provider for Cycle<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        if self.items.is_empty() || self.remaining == Some(0) {
            self.current = None;
            return false;
        }
        self.current = Some(self.items[self.index].clone());
        self.index += 1;
        if self.index == self.items.len() {
            self.index = 0;
            if let Some(rounds) = &mut self.remaining {
                *rounds -= 1;
            }
        }
        true
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "[cycle]");
        PipelineInfo::source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_repeats_rounds() {
        let mut cycle = Cycle::new(vec![1, 2], 2);
        let mut seen = Vec::new();
        while let Some(value) = cycle.pull() {
            seen.push(value);
        }
        assert_eq!(seen, vec![1, 2, 1, 2]);
    }

    #[test]
    fn test_cycle_of_empty_container_is_exhausted() {
        let mut cycle = Cycle::<i32>::new(Vec::new(), 0);
        assert!(!cycle.advance());
    }
}
