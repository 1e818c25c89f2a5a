// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cmp::Ordering;

use rill_core::Provider;

use crate::set_operation::{Advance, SetOpContext, SetOpStrategy, SetOperation, UpdateState};

/// Strategy emitting elements present on exactly one side.
///
/// Ties are swallowed; an element smaller than the other side's current one
/// cannot tie later, so it goes out immediately.
pub struct SymmetricDifferenceStrategy;

impl<T, C> SetOpStrategy<T, C> for SymmetricDifferenceStrategy
where
    C: FnMut(&T, &T) -> Ordering,
{
    fn name(&self) -> &'static str {
        "SymmetricDifference"
    }

    fn neither_depleted(&mut self, cx: &mut SetOpContext<T, C>) -> UpdateState {
        if cx.left_smaller() {
            cx.set_advance(Advance::Left);
            cx.emit_left();
            return UpdateState::UpdateFinished;
        }
        if cx.right_smaller() {
            cx.set_advance(Advance::Right);
            cx.emit_right();
            return UpdateState::UpdateFinished;
        }
        cx.set_advance(Advance::Both);
        UpdateState::NotFinished
    }
}

/// Computes the symmetric difference of two comparator-sorted providers.
///
/// Both inputs must already be sorted ascending under `comparator`.
pub fn symmetric_difference<L, R, C>(
    left: L,
    right: R,
    comparator: C,
) -> SetOperation<L, R, C, SymmetricDifferenceStrategy>
where
    L: Provider,
    R: Provider<Item = L::Item>,
    C: FnMut(&L::Item, &L::Item) -> Ordering,
{
    SetOperation::new(left, right, comparator, SymmetricDifferenceStrategy)
}
