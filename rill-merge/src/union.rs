// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cmp::Ordering;

use rill_core::Provider;

use crate::set_operation::{Advance, SetOpContext, SetOpStrategy, SetOperation, UpdateState};

/// Strategy emitting the smaller current element, collapsing ties across the
/// two sides into a single output element.
pub struct UnionStrategy;

impl<T, C> SetOpStrategy<T, C> for UnionStrategy
where
    C: FnMut(&T, &T) -> Ordering,
{
    fn name(&self) -> &'static str {
        "Union"
    }

    fn neither_depleted(&mut self, cx: &mut SetOpContext<T, C>) -> UpdateState {
        if cx.left_smaller() {
            cx.set_advance(Advance::Left);
            cx.emit_left();
        } else if cx.right_smaller() {
            cx.set_advance(Advance::Right);
            cx.emit_right();
        } else {
            // Tie: one element represents both sides.
            cx.set_advance(Advance::Both);
            cx.emit_left();
        }
        UpdateState::UpdateFinished
    }
}

/// Unions two comparator-sorted providers.
///
/// Elements present on both sides appear once per tie; everything else passes
/// through in order. Both inputs must already be sorted ascending under
/// `comparator`.
///
/// # Examples
///
/// ```
/// use rill_merge::union;
/// use rill_test_utils::{drain, VecSource};
///
/// let left = VecSource::new(vec![1, 2, 3, 4, 5]);
/// let right = VecSource::new(vec![2, 3, 4, 6, 7]);
///
/// let unioned = union(left, right, i32::cmp);
/// assert_eq!(drain(unioned), vec![1, 2, 3, 4, 5, 6, 7]);
/// ```
pub fn union<L, R, C>(left: L, right: R, comparator: C) -> SetOperation<L, R, C, UnionStrategy>
where
    L: Provider,
    R: Provider<Item = L::Item>,
    C: FnMut(&L::Item, &L::Item) -> Ordering,
{
    SetOperation::new(left, right, comparator, UnionStrategy)
}
