// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cmp::Ordering;

use rill_core::Provider;

use crate::set_operation::{Advance, SetOpContext, SetOpStrategy, SetOperation, UpdateState};

/// Strategy emitting elements of the left side that never tie with the right.
///
/// Ties are swallowed (both sides advance), a smaller right element is
/// skipped past, and a smaller left element is a keeper. Once the left side
/// runs dry there are no candidates left; once the right side runs dry,
/// everything remaining on the left passes through.
pub struct DifferenceStrategy;

impl<T, C> SetOpStrategy<T, C> for DifferenceStrategy
where
    C: FnMut(&T, &T) -> Ordering,
{
    fn name(&self) -> &'static str {
        "Difference"
    }

    fn neither_depleted(&mut self, cx: &mut SetOpContext<T, C>) -> UpdateState {
        if cx.left_smaller() {
            cx.set_advance(Advance::Left);
            cx.emit_left();
            return UpdateState::UpdateFinished;
        }
        if cx.right_smaller() {
            cx.set_advance(Advance::Right);
        } else {
            cx.set_advance(Advance::Both);
        }
        UpdateState::NotFinished
    }

    fn left_depleted(&mut self, _cx: &mut SetOpContext<T, C>) -> UpdateState {
        UpdateState::StreamFinished
    }
}

/// Computes `left - right` over two comparator-sorted providers.
///
/// Both inputs must already be sorted ascending under `comparator`.
pub fn difference<L, R, C>(
    left: L,
    right: R,
    comparator: C,
) -> SetOperation<L, R, C, DifferenceStrategy>
where
    L: Provider,
    R: Provider<Item = L::Item>,
    C: FnMut(&L::Item, &L::Item) -> Ordering,
{
    SetOperation::new(left, right, comparator, DifferenceStrategy)
}
