// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cmp::Ordering;

use rill_core::Provider;

use crate::set_operation::{Advance, SetOpContext, SetOpStrategy, SetOperation, UpdateState};

/// Strategy emitting only elements present on both sides.
///
/// The smaller side is walked forward without emitting until the currents
/// tie; one side running dry ends the stream, since no further ties can
/// exist.
pub struct IntersectionStrategy;

impl<T, C> SetOpStrategy<T, C> for IntersectionStrategy
where
    C: FnMut(&T, &T) -> Ordering,
{
    fn name(&self) -> &'static str {
        "Intersection"
    }

    fn neither_depleted(&mut self, cx: &mut SetOpContext<T, C>) -> UpdateState {
        if cx.left_smaller() {
            cx.set_advance(Advance::Left);
            return UpdateState::NotFinished;
        }
        if cx.right_smaller() {
            cx.set_advance(Advance::Right);
            return UpdateState::NotFinished;
        }
        cx.set_advance(Advance::Both);
        cx.emit_left();
        UpdateState::UpdateFinished
    }

    fn left_depleted(&mut self, _cx: &mut SetOpContext<T, C>) -> UpdateState {
        UpdateState::StreamFinished
    }

    fn right_depleted(&mut self, _cx: &mut SetOpContext<T, C>) -> UpdateState {
        UpdateState::StreamFinished
    }
}

/// Intersects two comparator-sorted providers.
///
/// Both inputs must already be sorted ascending under `comparator`.
pub fn intersection<L, R, C>(
    left: L,
    right: R,
    comparator: C,
) -> SetOperation<L, R, C, IntersectionStrategy>
where
    L: Provider,
    R: Provider<Item = L::Item>,
    C: FnMut(&L::Item, &L::Item) -> Ordering,
{
    SetOperation::new(left, right, comparator, IntersectionStrategy)
}
