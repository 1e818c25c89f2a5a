// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cmp::Ordering;

use rill_core::Provider;

use crate::set_operation::{Advance, SetOpContext, SetOpStrategy, SetOperation, UpdateState};

/// Strategy emitting every element of both sides in comparator order.
///
/// Duplicates are kept, within one side and across the two. On a tie the
/// right element goes out first; since tied elements compare equal under the
/// operation's comparator, the choice is unobservable through it.
pub struct MergeStrategy;

impl<T, C> SetOpStrategy<T, C> for MergeStrategy
where
    C: FnMut(&T, &T) -> Ordering,
{
    fn name(&self) -> &'static str {
        "Merge"
    }

    fn neither_depleted(&mut self, cx: &mut SetOpContext<T, C>) -> UpdateState {
        if cx.left_smaller() {
            cx.set_advance(Advance::Left);
            cx.emit_left();
        } else {
            cx.set_advance(Advance::Right);
            cx.emit_right();
        }
        UpdateState::UpdateFinished
    }
}

/// Merges two comparator-sorted providers into one sorted provider,
/// preserving duplicates.
///
/// Both inputs must already be sorted ascending under `comparator`.
///
/// # Examples
///
/// ```
/// use rill_merge::merge;
/// use rill_test_utils::{drain, VecSource};
///
/// let left = VecSource::new(vec![1, 1, 2, 3, 3, 4]);
/// let right = VecSource::new(vec![2, 4, 4, 6]);
///
/// let merged = merge(left, right, i32::cmp);
/// assert_eq!(drain(merged), vec![1, 1, 2, 2, 3, 3, 4, 4, 4, 6]);
/// ```
pub fn merge<L, R, C>(left: L, right: R, comparator: C) -> SetOperation<L, R, C, MergeStrategy>
where
    L: Provider,
    R: Provider<Item = L::Item>,
    C: FnMut(&L::Item, &L::Item) -> Ordering,
{
    SetOperation::new(left, right, comparator, MergeStrategy)
}
