// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy, composable, pull-based sequence pipelines.
//!
//! This crate provides the [`Stream`] handle together with every source,
//! transform and combinator behind it. Pipelines are built by chaining
//! operations and run only when a terminal operation starts pulling; no
//! element is computed before something downstream asks for it.
//!
//! # Architecture
//!
//! The crate is built around a few key concepts:
//!
//! - **[`Provider`]**: the pull protocol every pipeline stage implements —
//!   `advance` moves to the next element, `take` moves it out
//! - **[`Stream`]**: a handle owning one boxed provider; all operations
//!   live on it
//! - **Occupancy**: each operation moves the provider out of its stream,
//!   leaving the handle *vacant*; using a vacant stream is an error, not
//!   undefined behavior
//! - **Laziness**: intermediate operations only wrap providers in
//!   providers; work happens during the terminal drain
//!
//! ## Operation Categories
//!
//! ### Sources
//!
//! Providers that start a pipeline: [`Empty`], [`Singleton`], [`Repeat`],
//! [`FromIter`], [`Cycle`], [`Generate`], [`Recurrence`] and
//! [`RandomSource`]. Wrap any of them with [`Stream::from_provider`].
//!
//! ### Element-Wise Transforms
//!
//! - **[`filter`]**: keep elements satisfying a predicate
//! - **[`map`]** / **[`flat_map`]**: reshape elements, or expand each into
//!   a nested stream
//! - **[`peek`]**: observe elements in flight without changing them
//!
//! ### Prefix and Suffix Selection
//!
//! - **[`take_while`]** / **[`drop_while`]**: cut the stream at the first
//!   predicate miss, from either end of the condition
//! - **[`slice`]** / **[`limit`]** / **[`skip`]**: select by position with
//!   an optional stride
//!
//! ### Neighborhood Transforms
//!
//! - **[`adjacent_distinct`]**: collapse runs of consecutive equal
//!   elements
//! - **[`adjacent_difference`]**: difference of each adjacent pair
//! - **[`partial_sum`]**: running sums
//! - **[`group`]** / **[`overlap`]**: fixed-size chunks and sliding
//!   windows
//!
//! ### Buffering Transforms
//!
//! - **[`sort`]** / **[`distinct`]**: order (and deduplicate) the whole
//!   stream
//! - **[`state_point`]**: run the upstream once and replay the snapshot
//!
//! ### Combinators
//!
//! - **[`zip`]** / **[`zip_with`]**: pair two streams element by element
//! - **[`chain`]**: one stream after another
//! - **[`merge`]**, **[`union`]**, **[`intersection`]**, **[`difference`]**,
//!   **[`symmetric_difference`]**: set algebra over comparator-sorted
//!   streams, powered by [`rill_merge`]
//!
//! ### Terminal Operations
//!
//! Positional picks ([`count`], [`first`], [`last`], [`nth`]), reductions
//! ([`fold`], [`reduce`], [`sum`], [`min`], [`minmax`], …), quantifiers
//! ([`any`], [`all`], [`none`], [`not_all`]), sampling ([`sample`],
//! [`random_element`]), collection ([`to_vec`], [`collect`], [`joined`], …)
//! and [`for_each`]. `Stream<bool>` additionally carries `filter_true`,
//! `any_true`, `all_true`, `none_true` and `not_all_true`.
//!
//! # Occupancy Explained
//!
//! A stream is a state machine with two states and one-way traffic:
//! *occupied* (owns a provider) and *vacant* (gave it away). Every
//! intermediate operation vacates its receiver and hands back a fresh
//! occupied stream; every terminal operation vacates its receiver for
//! good. The second use of a handle is therefore always a
//! [`RillError::VacantStream`] naming the operation that was attempted:
//!
//! ```
//! use rill_stream::{FromIter, RillError, Stream};
//!
//! # fn main() -> rill_core::Result<()> {
//! let mut numbers = Stream::from_provider(FromIter::new(1..=3));
//! let mut doubled = numbers.map(|n| n * 2)?;
//!
//! assert!(!numbers.is_occupied());
//! assert!(matches!(
//!     numbers.count(),
//!     Err(RillError::VacantStream { operation: "count" })
//! ));
//!
//! assert_eq!(doubled.to_vec()?, vec![2, 4, 6]);
//! # Ok(())
//! # }
//! ```
//!
//! The only exception is [`pipeline`](Stream::pipeline), which borrows
//! instead of consuming and renders the pipeline for debugging:
//!
//! ```
//! use rill_stream::{FromIter, Stream};
//!
//! # fn main() -> rill_core::Result<()> {
//! let mut numbers = Stream::from_provider(FromIter::new([1, 2, 3]));
//! let evens = numbers.filter(|n| n % 2 == 0)?;
//! assert_eq!(
//!     evens.pipeline()?,
//!     "Filter:\n  [iterator source]\nStream pipeline with 1 stage(s) and 1 source(s).\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Laziness Explained
//!
//! Pipelines over infinite sources are fine as long as something bounds
//! the drain. Position-bounded stages never pull the upstream past the
//! last element they need:
//!
//! ```
//! use rill_stream::{Generate, Stream};
//!
//! # fn main() -> rill_core::Result<()> {
//! let naturals = Generate::new({
//!     let mut n = 0;
//!     move || {
//!         n += 1;
//!         Some(n)
//!     }
//! });
//! let mut firsts = Stream::from_provider(naturals).limit(3)?;
//! assert_eq!(firsts.to_vec()?, vec![1, 2, 3]);
//! # Ok(())
//! # }
//! ```
//!
//! # Operation Selection Guide
//!
//! ## When You Need Part of the Stream
//!
//! | Operation | Use When | Bounded By |
//! |-----------|----------|------------|
//! | [`limit`] | First `n` elements | Position |
//! | [`skip`] | Everything after `n` elements | Position |
//! | [`slice`] | Strided window `[start, end)` | Position |
//! | [`take_while`] | Prefix satisfying a condition | Data |
//! | [`drop_while`] | Suffix after a condition breaks | Data |
//! | [`filter`] | Scattered matches | Data |
//!
//! ## When You Need Context Between Elements
//!
//! | Operation | Output | Memory |
//! |-----------|--------|--------|
//! | [`adjacent_distinct`] | Run starts | One element |
//! | [`adjacent_difference`] | Pairwise deltas | One element |
//! | [`partial_sum`] | Running totals | One element |
//! | [`overlap`] | Sliding `[T; N]` windows | `N` elements |
//! | [`group`] | Disjoint `[T; N]` chunks | `N` elements |
//!
//! ## When Order Matters
//!
//! | Operation | Input Assumption | Behavior |
//! |-----------|------------------|----------|
//! | [`sort`] | Any finite stream | Buffers everything, emits ordered |
//! | [`distinct`] | Any finite stream | Buffers, sorts, deduplicates |
//! | [`merge`] | Both sides sorted | Streams lazily, keeps duplicates |
//! | [`union`] | Both sides sorted | Streams lazily, collapses ties |
//!
//! # Performance Characteristics
//!
//! - **Streaming stages** ([`filter`], [`map`], [`zip`], the set
//!   operations, …) hold `O(1)` state and pull one element at a time
//! - **Windowed stages** ([`group`], [`overlap`]) hold `O(N)` state
//! - **Buffering stages** ([`sort`], [`distinct`], [`state_point`]) drain
//!   the whole upstream on first pull and must not sit on an infinite
//!   source
//! - Exhaustion is sticky everywhere: once a stage reports the end, it
//!   never pulls its upstream again
//!
//! # Common Patterns
//!
//! ## Pattern: Moving Average
//!
//! ```
//! use rill_stream::{FromIter, Stream};
//!
//! # fn main() -> rill_core::Result<()> {
//! let mut prices = Stream::from_provider(FromIter::new([10.0, 11.0, 13.0, 10.0]));
//! let mut averages = prices.overlap::<2>()?.map(|[a, b]| (a + b) / 2.0)?;
//! assert_eq!(averages.to_vec()?, vec![10.5, 12.0, 11.5]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Pattern: Set Algebra over Sorted Data
//!
//! ```
//! use rill_stream::{FromIter, Stream};
//!
//! # fn main() -> rill_core::Result<()> {
//! let mut on_call = Stream::from_provider(FromIter::new(["ana", "bo", "cy"]));
//! let mut sick = Stream::from_provider(FromIter::new(["bo"]));
//! let mut available = on_call.difference(&mut sick)?;
//! assert_eq!(available.to_vec()?, vec!["ana", "cy"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Pattern: Observing a Pipeline Without Touching It
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use rill_stream::{FromIter, Stream};
//!
//! # fn main() -> rill_core::Result<()> {
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let tap = Rc::clone(&seen);
//!
//! let mut numbers = Stream::from_provider(FromIter::new(1..=4));
//! let mut evens = numbers
//!     .peek(move |n| tap.borrow_mut().push(*n))?
//!     .filter(|n| n % 2 == 0)?;
//!
//! assert_eq!(evens.to_vec()?, vec![2, 4]);
//! assert_eq!(*seen.borrow(), vec![1, 2, 3, 4]); // peek saw everything
//! # Ok(())
//! # }
//! ```
//!
//! # Anti-Patterns
//!
//! ## ❌ Don't: Reuse a Vacated Stream
//!
//! ```text
//! // BAD: `numbers` is vacant after the first operation
//! let mut evens = numbers.filter(|n| n % 2 == 0)?;
//! let mut odds = numbers.filter(|n| n % 2 == 1)?; // VacantStream
//! ```
//!
//! Snapshot and rebuild instead:
//!
//! ```text
//! // GOOD: materialize once, build two pipelines from the snapshot
//! let snapshot = numbers.to_vec()?;
//! let mut evens = Stream::from_provider(FromIter::new(snapshot.clone()));
//! let mut odds = Stream::from_provider(FromIter::new(snapshot));
//! ```
//!
//! ## ❌ Don't: Buffer an Infinite Source
//!
//! ```text
//! // BAD: sort drains the upstream before emitting anything
//! let sorted = endless.sort()?; // never returns from the first pull
//! ```
//!
//! Bound the stream first:
//!
//! ```text
//! // GOOD: limit makes the buffer finite
//! let sorted = endless.limit(1_000)?.sort()?;
//! ```
//!
//! ## ❌ Don't: Feed Unsorted Streams to Set Operations
//!
//! ```text
//! // BAD: merge assumes both sides are sorted; garbage in, garbage out
//! let merged = shuffled_a.merge(&mut shuffled_b)?;
//! ```
//!
//! Sort on the way in:
//!
//! ```text
//! // GOOD: establish the precondition explicitly
//! let merged = shuffled_a.sort()?.merge(&mut shuffled_b.sort()?)?;
//! ```
//!
//! # Getting Started
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rill-stream = "0.3"
//! ```
//!
//! Most applications want the `rill` facade crate instead, which re-exports
//! this crate and adds the `make` constructors and convenience macros.
//!
//! [`filter`]: Stream::filter
//! [`map`]: Stream::map
//! [`flat_map`]: Stream::flat_map
//! [`peek`]: Stream::peek
//! [`take_while`]: Stream::take_while
//! [`drop_while`]: Stream::drop_while
//! [`slice`]: Stream::slice
//! [`limit`]: Stream::limit
//! [`skip`]: Stream::skip
//! [`adjacent_distinct`]: Stream::adjacent_distinct
//! [`adjacent_difference`]: Stream::adjacent_difference
//! [`partial_sum`]: Stream::partial_sum
//! [`group`]: Stream::group
//! [`overlap`]: Stream::overlap
//! [`sort`]: Stream::sort
//! [`distinct`]: Stream::distinct
//! [`state_point`]: Stream::state_point
//! [`zip`]: Stream::zip
//! [`zip_with`]: Stream::zip_with
//! [`chain`]: Stream::chain
//! [`merge`]: Stream::merge
//! [`union`]: Stream::union
//! [`intersection`]: Stream::intersection
//! [`difference`]: Stream::difference
//! [`symmetric_difference`]: Stream::symmetric_difference
//! [`count`]: Stream::count
//! [`first`]: Stream::first
//! [`last`]: Stream::last
//! [`nth`]: Stream::nth
//! [`fold`]: Stream::fold
//! [`reduce`]: Stream::reduce
//! [`sum`]: Stream::sum
//! [`min`]: Stream::min
//! [`minmax`]: Stream::minmax
//! [`any`]: Stream::any
//! [`all`]: Stream::all
//! [`none`]: Stream::none
//! [`not_all`]: Stream::not_all
//! [`sample`]: Stream::sample
//! [`random_element`]: Stream::random_element
//! [`to_vec`]: Stream::to_vec
//! [`collect`]: Stream::collect
//! [`joined`]: Stream::joined
//! [`for_each`]: Stream::for_each

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
mod logging;

pub mod adjacent_difference;
pub mod adjacent_distinct;
pub mod chain;
mod collect;
pub mod cycle;
pub mod distinct;
pub mod drop_while;
pub mod empty;
pub mod filter;
pub mod flat_map;
pub mod from_iter;
pub mod generate;
pub mod group;
pub mod iter;
pub mod map;
pub mod overlap;
pub mod partial_sum;
pub mod peek;
pub mod random;
pub mod recurrence;
pub mod repeat;
mod set_ops;
pub mod singleton;
pub mod slice;
pub mod sort;
mod specialized;
pub mod state_point;
pub mod stream;
pub mod take_while;
mod terminal;
pub mod zip;

// Re-export commonly used types
pub use adjacent_difference::AdjacentDifference;
pub use adjacent_distinct::AdjacentDistinct;
pub use chain::Chain;
pub use cycle::Cycle;
pub use distinct::Distinct;
pub use drop_while::DropWhile;
pub use empty::Empty;
pub use filter::Filter;
pub use flat_map::FlatMap;
pub use from_iter::FromIter;
pub use generate::Generate;
pub use group::{Group, GroupN};
pub use iter::Iter;
pub use map::Map;
pub use overlap::{Overlap, OverlapN};
pub use partial_sum::PartialSum;
pub use peek::Peek;
pub use random::RandomSource;
pub use recurrence::Recurrence;
pub use repeat::Repeat;
pub use rill_core::{BoxProvider, PipelineInfo, Provider, Result, RillError};
pub use singleton::Singleton;
pub use slice::Slice;
pub use sort::Sort;
pub use state_point::StatePoint;
pub use stream::Stream;
pub use take_while::TakeWhile;
pub use zip::Zip;
