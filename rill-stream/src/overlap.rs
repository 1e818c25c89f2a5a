// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sliding windows over the upstream, one new element per advance. The
//! compile-time variant emits `[T; N]` snapshots; the run-time variant
//! emits `VecDeque<T>` snapshots. Input shorter than the window yields
//! nothing.

use std::collections::VecDeque;

use rill_core::{write_indented, PipelineInfo, Provider};

/// Sliding `[T; N]` windows.
pub struct Overlap<P: Provider, const N: usize> {
    upstream: P,
    window: Option<[P::Item; N]>,
    current: Option<[P::Item; N]>,
    done: bool,
}

impl<P: Provider, const N: usize> Overlap<P, N> {
    /// # Panics
    ///
    /// Panics when `N < 2`; a one-element window is the identity.
    pub fn new(upstream: P) -> Self {
        assert!(N >= 2, "overlap: window size must be at least 2, got {N}");
        Self {
            upstream,
            window: None,
            current: None,
            done: false,
        }
    }
}

impl<P, const N: usize> Provider for Overlap<P, N>
where
    P: Provider,
    P::Item: Clone,
{
    type Item = [P::Item; N];

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        match &mut self.window {
            None => {
                let mut seed = Vec::with_capacity(N);
                while seed.len() < N {
                    match self.upstream.pull() {
                        Some(value) => seed.push(value),
                        None => {
                            self.done = true;
                            return false;
                        }
                    }
                }
                let mut filled = seed.into_iter();
                let window: [P::Item; N] = std::array::from_fn(|_| {
                    filled.next().expect("window holds exactly N elements")
                });
                self.current = Some(window.clone());
                self.window = Some(window);
                true
            }
            Some(window) => match self.upstream.pull() {
                Some(value) => {
                    window.rotate_left(1);
                    window[N - 1] = value;
                    self.current = Some(window.clone());
                    true
                }
                None => {
                    self.done = true;
                    self.current = None;
                    false
                }
            },
        }
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "Overlap:");
        self.upstream.describe(out, depth + 1).add_stage()
    }
}

/// Sliding `VecDeque<T>` windows of a runtime size.
pub struct OverlapN<P: Provider> {
    upstream: P,
    size: usize,
    window: VecDeque<P::Item>,
    primed: bool,
    current: Option<VecDeque<P::Item>>,
    done: bool,
}

impl<P: Provider> OverlapN<P> {
    /// # Panics
    ///
    /// Panics when `size == 0`.
    pub fn new(upstream: P, size: usize) -> Self {
        assert!(
            size > 0,
            "overlap_n: window size must be positive, got {size}"
        );
        Self {
            upstream,
            size,
            window: VecDeque::with_capacity(size),
            primed: false,
            current: None,
            done: false,
        }
    }
}

impl<P> Provider for OverlapN<P>
where
    P: Provider,
    P::Item: Clone,
{
    type Item = VecDeque<P::Item>;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        if self.primed {
            match self.upstream.pull() {
                Some(value) => {
                    self.window.pop_front();
                    self.window.push_back(value);
                }
                None => {
                    self.done = true;
                    self.current = None;
                    return false;
                }
            }
        } else {
            while self.window.len() < self.size {
                match self.upstream.pull() {
                    Some(value) => self.window.push_back(value),
                    None => {
                        self.done = true;
                        return false;
                    }
                }
            }
            self.primed = true;
        }
        self.current = Some(self.window.clone());
        true
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "Overlap:");
        self.upstream.describe(out, depth + 1).add_stage()
    }
}
