// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The generic sorted-merge engine.
//!
//! All five set operations share one driver: [`SetOperation`] keeps a current
//! element per side, advances whichever sides the strategy requested on the
//! previous step, tracks which sides have run dry, and hands control to a
//! [`SetOpStrategy`] to decide what to emit next. Strategies describe policy
//! only; the pull bookkeeping lives here.
//!
//! Both inputs must already be sorted ascending under the comparator given to
//! the operation. This is a precondition and is not verified.

use std::cmp::Ordering;

use rill_core::{write_indented, PipelineInfo, Provider};

/// Which side(s) the engine pulls at the start of the next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Pull the left upstream only.
    Left,
    /// Pull the right upstream only.
    Right,
    /// Pull both upstreams.
    Both,
}

/// Which sides of the combination have been exhausted so far.
///
/// Depletion only ever grows: `Neither` to one side to `Both`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depletion {
    /// Both sides still have elements.
    Neither,
    /// The left upstream is exhausted.
    Left,
    /// The right upstream is exhausted.
    Right,
    /// Both upstreams are exhausted.
    Both,
}

/// Outcome of one strategy dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateState {
    /// No element produced yet; the engine advances and dispatches again.
    /// This is how a strategy skips values (intersection walking the smaller
    /// side forward, difference swallowing a tie) without emitting.
    NotFinished,
    /// An element is ready in the result slot.
    UpdateFinished,
    /// The combined stream is over.
    StreamFinished,
}

/// Mutable engine state handed to every strategy method.
///
/// Holds the current element of each side, the comparator, the pending
/// advance request and the depletion state. Strategies inspect the currents
/// through the comparison helpers, move one of them into the result slot via
/// [`emit_left`](Self::emit_left) / [`emit_right`](Self::emit_right), and
/// schedule the next pull with [`set_advance`](Self::set_advance).
pub struct SetOpContext<T, C> {
    comparator: C,
    left: Option<T>,
    right: Option<T>,
    advance: Advance,
    depletion: Depletion,
    result: Option<T>,
}

impl<T, C> SetOpContext<T, C> {
    fn new(comparator: C) -> Self {
        Self {
            comparator,
            left: None,
            right: None,
            advance: Advance::Both,
            depletion: Depletion::Neither,
            result: None,
        }
    }

    /// Current left element, if the side is not depleted.
    pub fn left(&self) -> Option<&T> {
        self.left.as_ref()
    }

    /// Current right element, if the side is not depleted.
    pub fn right(&self) -> Option<&T> {
        self.right.as_ref()
    }

    /// Moves the left current element into the result slot.
    ///
    /// The side is refilled the next time the engine advances it; schedule
    /// that with [`set_advance`](Self::set_advance) before finishing.
    pub fn emit_left(&mut self) {
        self.result = self.left.take();
    }

    /// Moves the right current element into the result slot.
    pub fn emit_right(&mut self) {
        self.result = self.right.take();
    }

    /// Places an arbitrary element in the result slot.
    pub fn set_result(&mut self, value: T) {
        self.result = Some(value);
    }

    /// Requests which side(s) the engine pulls at the start of the next step.
    pub fn set_advance(&mut self, advance: Advance) {
        self.advance = advance;
    }

    /// Current depletion state.
    pub fn depletion(&self) -> Depletion {
        self.depletion
    }

    // A side that runs dry flips depletion one step and redirects future
    // advances to the survivor; a second dry side means the end.
    fn note_depleted(&mut self, side: Depletion, survivor: Advance) {
        if self.depletion == Depletion::Neither {
            self.depletion = side;
            self.advance = survivor;
        } else {
            self.depletion = Depletion::Both;
        }
    }
}

impl<T, C> SetOpContext<T, C>
where
    C: FnMut(&T, &T) -> Ordering,
{
    /// Compares the two current elements.
    ///
    /// Only meaningful while neither side is depleted; the engine guarantees
    /// this before calling [`SetOpStrategy::neither_depleted`].
    pub fn ordering(&mut self) -> Ordering {
        let left = self.left.as_ref().expect("left element present");
        let right = self.right.as_ref().expect("right element present");
        (self.comparator)(left, right)
    }

    /// Whether the left current element sorts before the right one.
    pub fn left_smaller(&mut self) -> bool {
        self.ordering() == Ordering::Less
    }

    /// Whether the right current element sorts before the left one.
    pub fn right_smaller(&mut self) -> bool {
        self.ordering() == Ordering::Greater
    }

    /// Whether the two current elements compare equal.
    pub fn tied(&mut self) -> bool {
        self.ordering() == Ordering::Equal
    }
}

/// Policy half of a set operation.
///
/// [`neither_depleted`](Self::neither_depleted) is the one required method:
/// it sees both current elements and decides what to emit and which side(s)
/// to advance. The depleted-side methods default to draining the surviving
/// side element by element and finishing once both sides are dry; operations
/// that stop early (intersection, difference) override them.
///
/// The notification hooks run after each pull attempt of the corresponding
/// side and before each engine step; the bundled strategies leave them empty,
/// and they exist for strategies that track pull history.
pub trait SetOpStrategy<T, C> {
    /// Operation name shown by pipeline introspection.
    fn name(&self) -> &'static str;

    /// Both sides hold a current element; decide what happens next.
    fn neither_depleted(&mut self, cx: &mut SetOpContext<T, C>) -> UpdateState;

    /// The left side is exhausted; the right current element is valid.
    fn left_depleted(&mut self, cx: &mut SetOpContext<T, C>) -> UpdateState {
        cx.emit_right();
        UpdateState::UpdateFinished
    }

    /// The right side is exhausted; the left current element is valid.
    fn right_depleted(&mut self, cx: &mut SetOpContext<T, C>) -> UpdateState {
        cx.emit_left();
        UpdateState::UpdateFinished
    }

    /// Both sides are exhausted.
    fn both_depleted(&mut self, _cx: &mut SetOpContext<T, C>) -> UpdateState {
        UpdateState::StreamFinished
    }

    /// Runs after every pull attempt of the left side.
    fn on_left_advance(&mut self, _cx: &mut SetOpContext<T, C>) {}

    /// Runs after every pull attempt of the right side.
    fn on_right_advance(&mut self, _cx: &mut SetOpContext<T, C>) {}

    /// Runs once at the start of every engine step.
    fn before_update(&mut self, _cx: &mut SetOpContext<T, C>) {}
}

/// Provider combining two sorted upstreams under a pluggable strategy.
pub struct SetOperation<L, R, C, S>
where
    L: Provider,
    R: Provider<Item = L::Item>,
{
    left: L,
    right: R,
    context: SetOpContext<L::Item, C>,
    strategy: S,
    finished: bool,
}

impl<L, R, C, S> SetOperation<L, R, C, S>
where
    L: Provider,
    R: Provider<Item = L::Item>,
    C: FnMut(&L::Item, &L::Item) -> Ordering,
    S: SetOpStrategy<L::Item, C>,
{
    /// Assembles the engine over two sorted upstreams.
    pub fn new(left: L, right: R, comparator: C, strategy: S) -> Self {
        Self {
            left,
            right,
            context: SetOpContext::new(comparator),
            strategy,
            finished: false,
        }
    }

    fn advance_left_side(&mut self) {
        match self.left.pull() {
            Some(value) => self.context.left = Some(value),
            None => {
                self.context.left = None;
                self.context.note_depleted(Depletion::Left, Advance::Right);
            }
        }
        self.strategy.on_left_advance(&mut self.context);
    }

    fn advance_right_side(&mut self) {
        match self.right.pull() {
            Some(value) => self.context.right = Some(value),
            None => {
                self.context.right = None;
                self.context.note_depleted(Depletion::Right, Advance::Left);
            }
        }
        self.strategy.on_right_advance(&mut self.context);
    }

    fn perform_advance(&mut self) {
        match self.context.advance {
            Advance::Left => self.advance_left_side(),
            Advance::Right => self.advance_right_side(),
            Advance::Both => {
                self.advance_left_side();
                self.advance_right_side();
            }
        }
    }

    fn perform_update(&mut self) -> bool {
        self.strategy.before_update(&mut self.context);
        loop {
            self.perform_advance();
            let state = match self.context.depletion {
                Depletion::Neither => self.strategy.neither_depleted(&mut self.context),
                Depletion::Left => self.strategy.left_depleted(&mut self.context),
                Depletion::Right => self.strategy.right_depleted(&mut self.context),
                Depletion::Both => self.strategy.both_depleted(&mut self.context),
            };
            match state {
                UpdateState::UpdateFinished => return true,
                UpdateState::StreamFinished => return false,
                UpdateState::NotFinished => {}
            }
        }
    }
}

impl<L, R, C, S> Provider for SetOperation<L, R, C, S>
where
    L: Provider,
    R: Provider<Item = L::Item>,
    C: FnMut(&L::Item, &L::Item) -> Ordering,
    S: SetOpStrategy<L::Item, C>,
{
    type Item = L::Item;

    fn advance(&mut self) -> bool {
        if self.finished {
            return false;
        }
        if self.perform_update() {
            true
        } else {
            self.finished = true;
            false
        }
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.context.result.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        write_indented(out, depth, &format!("{}:", self.strategy.name()));
        let left = self.left.describe(out, depth + 1);
        let right = self.right.describe(out, depth + 1);
        (left + right).add_stage()
    }
}
