// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{write_indented, PipelineInfo, Provider};

/// Combines two upstreams in lockstep through a zipper function.
///
/// Exhausted as soon as either side is; the left side is pulled first, so
/// when the left runs out the right is left untouched for that step.
pub struct Zip<L, R, F, O> {
    left: L,
    right: R,
    zipper: F,
    current: Option<O>,
    done: bool,
}

impl<L, R, F, O> Zip<L, R, F, O>
where
    L: Provider,
    R: Provider,
    F: FnMut(L::Item, R::Item) -> O,
{
    pub const fn new(left: L, right: R, zipper: F) -> Self {
        Self {
            left,
            right,
            zipper,
            current: None,
            done: false,
        }
    }
}

impl<L, R, F, O> Provider for Zip<L, R, F, O>
where
    L: Provider,
    R: Provider,
    F: FnMut(L::Item, R::Item) -> O,
{
    type Item = O;

    fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        let Some(left) = self.left.pull() else {
            self.done = true;
            self.current = None;
            return false;
        };
        let Some(right) = self.right.pull() else {
            self.done = true;
            self.current = None;
            return false;
        };
        self.current = Some((self.zipper)(left, right));
        true
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, "Zip:");
        let left = self.left.describe(out, depth + 1);
        let right = self.right.describe(out, depth + 1);
        (left + right).add_stage()
    }
}
