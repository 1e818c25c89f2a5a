// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Tests for the engine mechanics shared by every set operation: advance
//! bookkeeping, depletion transitions, strategy hooks and custom strategies.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

use rill_core::{PipelineInfo, Provider};
use rill_merge::{
    intersection, merge, Advance, SetOpContext, SetOpStrategy, SetOperation, UpdateState,
};
use rill_test_utils::{drain, VecSource};

/// Wraps a source and counts how many times it is advanced.
struct CountingSource {
    inner: VecSource<i32>,
    advances: Rc<RefCell<usize>>,
}

impl CountingSource {
    fn new(items: Vec<i32>) -> (Self, Rc<RefCell<usize>>) {
        let advances = Rc::new(RefCell::new(0));
        let source = Self {
            inner: VecSource::new(items),
            advances: Rc::clone(&advances),
        };
        (source, advances)
    }
}

impl Provider for CountingSource {
    type Item = i32;

    fn advance(&mut self) -> bool {
        *self.advances.borrow_mut() += 1;
        self.inner.advance()
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        self.inner.describe(out, depth)
    }
}

/// Merge-like strategy that records every hook invocation.
struct CountingMerge {
    left_advances: Rc<RefCell<usize>>,
    right_advances: Rc<RefCell<usize>>,
    steps: Rc<RefCell<usize>>,
}

impl<C> SetOpStrategy<i32, C> for CountingMerge
where
    C: FnMut(&i32, &i32) -> Ordering,
{
    fn name(&self) -> &'static str {
        "CountingMerge"
    }

    fn neither_depleted(&mut self, cx: &mut SetOpContext<i32, C>) -> UpdateState {
        if cx.left_smaller() {
            cx.set_advance(Advance::Left);
            cx.emit_left();
        } else {
            cx.set_advance(Advance::Right);
            cx.emit_right();
        }
        UpdateState::UpdateFinished
    }

    fn on_left_advance(&mut self, _cx: &mut SetOpContext<i32, C>) {
        *self.left_advances.borrow_mut() += 1;
    }

    fn on_right_advance(&mut self, _cx: &mut SetOpContext<i32, C>) {
        *self.right_advances.borrow_mut() += 1;
    }

    fn before_update(&mut self, _cx: &mut SetOpContext<i32, C>) {
        *self.steps.borrow_mut() += 1;
    }
}

/// Strategy that pairs the two sides up and emits their sum, falling back to
/// the default drain once one side runs dry.
struct PairSum;

impl<C> SetOpStrategy<i32, C> for PairSum
where
    C: FnMut(&i32, &i32) -> Ordering,
{
    fn name(&self) -> &'static str {
        "PairSum"
    }

    fn neither_depleted(&mut self, cx: &mut SetOpContext<i32, C>) -> UpdateState {
        let sum = cx.left().copied().unwrap() + cx.right().copied().unwrap();
        cx.set_result(sum);
        cx.set_advance(Advance::Both);
        UpdateState::UpdateFinished
    }
}

#[test]
fn test_hooks_fire_on_every_pull_attempt() {
    // Arrange
    let left_advances = Rc::new(RefCell::new(0));
    let right_advances = Rc::new(RefCell::new(0));
    let steps = Rc::new(RefCell::new(0));
    let strategy = CountingMerge {
        left_advances: Rc::clone(&left_advances),
        right_advances: Rc::clone(&right_advances),
        steps: Rc::clone(&steps),
    };
    let engine = SetOperation::new(
        VecSource::new(vec![1, 2]),
        VecSource::new(vec![3]),
        i32::cmp,
        strategy,
    );

    // Act
    let values = drain(engine);

    // Assert
    assert_eq!(values, vec![1, 2, 3]);
    // Left: initial pull, two refills (the last one fails). Right: initial
    // pull plus the final failing pull. One engine step per advance call.
    assert_eq!(*left_advances.borrow(), 3);
    assert_eq!(*right_advances.borrow(), 2);
    assert_eq!(*steps.borrow(), 4);
}

#[test]
fn test_depletion_redirects_advances_to_the_survivor() {
    // Arrange
    let (left, left_count) = CountingSource::new(vec![1]);
    let (right, right_count) = CountingSource::new(vec![2, 3, 4]);

    // Act
    let merged = merge(left, right, i32::cmp);
    let values = drain(merged);

    // Assert
    assert_eq!(values, vec![1, 2, 3, 4]);
    // The left side is pulled twice (one element, one failure) and never
    // again once depleted.
    assert_eq!(*left_count.borrow(), 2);
    assert_eq!(*right_count.borrow(), 4);
}

#[test]
fn test_finished_engine_stops_pulling_upstreams() {
    // Arrange
    let (left, left_count) = CountingSource::new(vec![1]);
    let (right, right_count) = CountingSource::new(vec![2]);
    let mut engine = intersection(left, right, i32::cmp);

    // Act
    while engine.advance() {
        engine.take();
    }
    let left_pulls = *left_count.borrow();
    let right_pulls = *right_count.borrow();
    let after_finish = engine.advance();

    // Assert
    assert!(!after_finish, "a finished engine must stay finished");
    assert_eq!(*left_count.borrow(), left_pulls);
    assert_eq!(*right_count.borrow(), right_pulls);
}

#[test]
fn test_take_without_advance_yields_nothing() {
    // Arrange
    let mut engine = merge(
        VecSource::new(vec![1]),
        VecSource::new(vec![2]),
        i32::cmp,
    );

    // Act & Assert
    assert_eq!(engine.take(), None);
    assert!(engine.advance());
    assert_eq!(engine.take(), Some(1));
    assert_eq!(engine.take(), None, "a taken element must not reappear");
}

#[test]
fn test_custom_strategy_drives_the_engine() {
    // Arrange
    let engine = SetOperation::new(
        VecSource::new(vec![1, 2, 3]),
        VecSource::new(vec![10, 20]),
        i32::cmp,
        PairSum,
    );

    // Act
    let values = drain(engine);

    // Assert: two pairs, then the default drain picks up the leftover 3.
    assert_eq!(values, vec![11, 22, 3]);
}

#[test]
fn test_describe_reports_strategy_and_both_sources() {
    // Arrange
    let engine = merge(
        VecSource::new(vec![1]),
        VecSource::new(vec![2]),
        i32::cmp,
    );

    // Act
    let mut out = String::new();
    let info = engine.describe(&mut out, 0);

    // Assert
    assert_eq!(out, "Merge:\n  [vec source]\n  [vec source]\n");
    assert_eq!(info.stages, 1);
    assert_eq!(info.sources, 2);
}
