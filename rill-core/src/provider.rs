// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The pull protocol spoken by every stage of a stream pipeline.
//!
//! A pipeline is a chain of [`Provider`] values, each owning its upstream.
//! Nothing happens until a consumer starts pulling: each call to
//! [`Provider::advance`] asks the stage to produce its next element, which is
//! then moved out with [`Provider::take`]. Sources sit at the bottom of the
//! chain and answer `advance` from their own state; transforms answer it by
//! pulling their upstream as many times as their semantics require.
//!
//! # Examples
//!
//! ```
//! use rill_core::{PipelineInfo, Provider};
//!
//! struct CountUp {
//!     next: u32,
//!     current: Option<u32>,
//! }
//!
//! impl Provider for CountUp {
//!     type Item = u32;
//!
//!     fn advance(&mut self) -> bool {
//!         self.current = Some(self.next);
//!         self.next += 1;
//!         true
//!     }
//!
//!     fn take(&mut self) -> Option<u32> {
//!         self.current.take()
//!     }
//!
//!     fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
//!         rill_core::write_indented(out, depth, "[count-up]");
//!         PipelineInfo::source()
//!     }
//! }
//!
//! let mut counter = CountUp { next: 7, current: None };
//! assert_eq!(counter.pull(), Some(7));
//! assert_eq!(counter.pull(), Some(8));
//! ```

use crate::describe::PipelineInfo;

/// A boxed, type-erased pipeline stage.
///
/// The stream façade stores its pipeline behind this alias so that arbitrary
/// provider chains share one stream type.
pub type BoxProvider<T> = Box<dyn Provider<Item = T>>;

/// A single stage of a lazy pull pipeline.
///
/// # Contract
///
/// - [`advance`](Self::advance) attempts to produce the next element and
///   reports whether one is available. Exhaustion is sticky: once a provider
///   has returned `false` it must keep returning `false` on every later call.
/// - [`take`](Self::take) moves the element produced by the most recent
///   successful `advance` out of the provider. A second `take` without an
///   intervening `advance` yields `None`, as does `take` before the first
///   `advance`.
/// - [`describe`](Self::describe) appends a human-readable rendering of this
///   stage (and, recursively, its upstream) to `out` and returns the
///   stage/source tally for the subtree.
///
/// Providers own their elements outright; stages that must both emit a value
/// and keep it for later comparisons take `Clone` bounds instead of sharing.
pub trait Provider {
    /// Element type produced by this stage.
    type Item;

    /// Attempts to produce the next element.
    ///
    /// Returns `true` when an element is ready to be [`take`](Self::take)n.
    fn advance(&mut self) -> bool;

    /// Moves the current element out of the provider.
    fn take(&mut self) -> Option<Self::Item>;

    /// Renders this stage into `out` at the given indentation depth and
    /// returns the pipeline tally for the subtree rooted here.
    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo;

    /// Advances and, on success, takes the produced element.
    ///
    /// This is the pattern every downstream consumer uses; `None` means the
    /// provider is exhausted.
    fn pull(&mut self) -> Option<Self::Item> {
        if self.advance() {
            self.take()
        } else {
            None
        }
    }
}

impl<P: Provider + ?Sized> Provider for Box<P> {
    type Item = P::Item;

    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn take(&mut self) -> Option<Self::Item> {
        (**self).take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        (**self).describe(out, depth)
    }
}
