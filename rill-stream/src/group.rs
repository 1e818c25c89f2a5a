// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Non-overlapping chunking into arrays (compile-time size) or vectors
//! (run-time size). A trailing partial chunk is dropped, never emitted.

use rill_core::{write_indented, PipelineInfo, Provider};

/// Groups the upstream into consecutive `[T; N]` chunks.
pub struct Group<P: Provider, const N: usize> {
    upstream: P,
    current: Option<[P::Item; N]>,
    done: bool,
}

impl<P: Provider, const N: usize> Group<P, N> {
    /// # Panics
    ///
    /// Panics when `N < 2`; single-element groups are the identity and a
    /// mistake at the call site.
    pub fn new(upstream: P) -> Self {
        assert!(N >= 2, "group: group size must be at least 2, got {N}");
        Self {
            upstream,
            current: None,
            done: false,
        }
    }
}

impl<P: Provider, const N: usize> Provider for Group<P, N> {
    type Item = [P::Item; N];

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        let mut chunk = Vec::with_capacity(N);
        while chunk.len() < N {
            match self.upstream.pull() {
                Some(value) => chunk.push(value),
                None => {
                    // Partial chunk: dropped, not emitted.
                    self.done = true;
                    self.current = None;
                    return false;
                }
            }
        }
        let mut filled = chunk.into_iter();
        self.current = Some(std::array::from_fn(|_| {
            filled.next().expect("chunk holds exactly N elements")
        }));
        true
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "Group:");
        self.upstream.describe(out, depth + 1).add_stage()
    }
}

/// Groups the upstream into consecutive `Vec<T>` chunks of a runtime size.
pub struct GroupN<P: Provider> {
    upstream: P,
    size: usize,
    current: Option<Vec<P::Item>>,
    done: bool,
}

impl<P: Provider> GroupN<P> {
    /// # Panics
    ///
    /// Panics when `size == 0`.
    pub fn new(upstream: P, size: usize) -> Self {
        assert!(size > 0, "group_n: group size must be positive, got {size}");
        Self {
            upstream,
            size,
            current: None,
            done: false,
        }
    }
}

impl<P: Provider> Provider for GroupN<P> {
    type Item = Vec<P::Item>;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        let mut chunk = Vec::with_capacity(self.size);
        while chunk.len() < self.size {
            match self.upstream.pull() {
                Some(value) => chunk.push(value),
                None => {
                    self.done = true;
                    self.current = None;
                    return false;
                }
            }
        }
        self.current = Some(chunk);
        true
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "Group:");
        self.upstream.describe(out, depth + 1).add_stage()
    }
}
