// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The user-facing stream handle and its intermediate operations.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::ops::{Add, Sub};

use rill_core::{BoxProvider, Provider, Result, RillError};

use crate::adjacent_difference::AdjacentDifference;
use crate::adjacent_distinct::AdjacentDistinct;
use crate::chain::Chain;
use crate::distinct::Distinct;
use crate::drop_while::DropWhile;
use crate::filter::Filter;
use crate::flat_map::FlatMap;
use crate::group::{Group, GroupN};
use crate::map::Map;
use crate::overlap::{Overlap, OverlapN};
use crate::partial_sum::PartialSum;
use crate::peek::Peek;
use crate::slice::Slice;
use crate::sort::Sort;
use crate::state_point::StatePoint;
use crate::take_while::TakeWhile;
use crate::zip::Zip;

/// Lazy handle over a pipeline of providers.
///
/// A stream is *occupied* while it owns a provider and *vacant* once an
/// operation has moved the provider out. Every intermediate operation
/// vacates the stream it is called on and returns a fresh occupied stream;
/// every terminal operation vacates the stream and produces a value. Using
/// a vacant stream is reported as [`RillError::VacantStream`] naming the
/// attempted operation — there is no way back to occupied.
///
/// Nothing upstream runs until a terminal operation (or external iteration)
/// starts pulling.
///
/// # Examples
///
/// ```
/// use rill_stream::{FromIter, Stream};
///
/// # fn main() -> rill_core::Result<()> {
/// let mut numbers = Stream::from_provider(FromIter::new(1..=6));
/// let mut evens = numbers.filter(|n| n % 2 == 0)?;
/// assert_eq!(evens.to_vec()?, vec![2, 4, 6]);
///
/// // `numbers` gave its provider away above.
/// assert!(numbers.count().is_err());
/// # Ok(())
/// # }
/// ```
pub struct Stream<T> {
    source: Option<BoxProvider<T>>,
}

impl<T> Stream<T> {
    /// Wraps an already-constructed provider; the sole bridge between
    /// providers and streams.
    #[must_use]
    pub fn from_provider<P>(provider: P) -> Self
    where
        P: Provider<Item = T> + 'static,
    {
        Self {
            source: Some(Box::new(provider)),
        }
    }

    /// A stream that was never given a provider.
    #[must_use]
    pub const fn vacant() -> Self {
        Self { source: None }
    }

    /// Whether this stream still owns its provider.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.source.is_some()
    }

    /// Renders the pipeline tree plus a one-line stage/source summary.
    ///
    /// The only non-consuming operation: the stream stays occupied and can
    /// be described repeatedly.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn pipeline(&self) -> Result<String> {
        match &self.source {
            Some(source) => {
                let mut out = String::new();
                let info = source.describe(&mut out, 0);
                out.push_str(&info.summary());
                out.push('\n');
                Ok(out)
            }
            None => Err(RillError::vacant("pipeline")),
        }
    }

    pub(crate) fn take_source(&mut self, operation: &'static str) -> Result<BoxProvider<T>> {
        self.source.take().ok_or(RillError::vacant(operation))
    }

    pub(crate) fn from_box(source: BoxProvider<T>) -> Self {
        Self {
            source: Some(source),
        }
    }

    pub(crate) fn into_source(self) -> Option<BoxProvider<T>> {
        self.source
    }
}

impl<T> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("occupied", &self.is_occupied())
            .finish()
    }
}

impl<T: 'static> Stream<T> {
    /// Keeps only the elements satisfying `predicate`, in order.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn filter<F>(&mut self, predicate: F) -> Result<Self>
    where
        F: FnMut(&T) -> bool + 'static,
    {
        let source = self.take_source("filter")?;
        Ok(Self::from_provider(Filter::new(source, predicate)))
    }

    /// Transforms every element; the element type may change.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn map<U, F>(&mut self, transform: F) -> Result<Stream<U>>
    where
        U: 'static,
        F: FnMut(T) -> U + 'static,
    {
        let source = self.take_source("map")?;
        Ok(Stream::from_provider(Map::new(source, transform)))
    }

    /// Maps every element to a nested stream and flattens the results.
    ///
    /// Each nested stream is drained completely before the next outer
    /// element is pulled. A vacant nested stream is logged and skipped.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    ///
    /// # Examples
    ///
    /// ```
    /// use rill_stream::{FromIter, Stream};
    ///
    /// # fn main() -> rill_core::Result<()> {
    /// let mut words = Stream::from_provider(FromIter::new(["one", "two"]));
    /// let mut letters = words.flat_map(|word| {
    ///     Stream::from_provider(FromIter::new(word.chars().collect::<Vec<_>>()))
    /// })?;
    /// assert_eq!(letters.collect::<String>()?, "onetwo");
    /// # Ok(())
    /// # }
    /// ```
    pub fn flat_map<U, F>(&mut self, transform: F) -> Result<Stream<U>>
    where
        U: 'static,
        F: FnMut(T) -> Stream<U> + 'static,
    {
        let source = self.take_source("flat_map")?;
        Ok(Stream::from_provider(FlatMap::new(source, transform)))
    }

    /// Passes elements while `predicate` holds, then ends the stream.
    ///
    /// The first failing element is discarded and the upstream is never
    /// advanced again.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn take_while<F>(&mut self, predicate: F) -> Result<Self>
    where
        F: FnMut(&T) -> bool + 'static,
    {
        let source = self.take_source("take_while")?;
        Ok(Self::from_provider(TakeWhile::new(source, predicate)))
    }

    /// Skips leading elements while `predicate` holds, then passes the
    /// rest through.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn drop_while<F>(&mut self, predicate: F) -> Result<Self>
    where
        F: FnMut(&T) -> bool + 'static,
    {
        let source = self.take_source("drop_while")?;
        Ok(Self::from_provider(DropWhile::new(source, predicate)))
    }

    /// Selects positions `start`, `start + step`, … below `end`.
    ///
    /// `start` is inclusive and `end` exclusive; `start >= end` gives an
    /// empty stream.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    ///
    /// # Panics
    ///
    /// Panics when `step == 0`.
    pub fn slice(&mut self, start: usize, end: usize, step: usize) -> Result<Self> {
        let source = self.take_source("slice")?;
        Ok(Self::from_provider(Slice::new(
            source,
            start,
            Some(end),
            step,
        )))
    }

    /// Like [`slice`](Self::slice) without an upper bound.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    ///
    /// # Panics
    ///
    /// Panics when `step == 0`.
    pub fn slice_to_end(&mut self, start: usize, step: usize) -> Result<Self> {
        let source = self.take_source("slice_to_end")?;
        Ok(Self::from_provider(Slice::new(source, start, None, step)))
    }

    /// Keeps at most the first `count` elements.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn limit(&mut self, count: usize) -> Result<Self> {
        let source = self.take_source("limit")?;
        Ok(Self::from_provider(Slice::new(source, 0, Some(count), 1)))
    }

    /// Discards the first `count` elements.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn skip(&mut self, count: usize) -> Result<Self> {
        let source = self.take_source("skip")?;
        Ok(Self::from_provider(Slice::new(source, count, None, 1)))
    }

    /// Invokes `observer` on every element as it passes, unchanged.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn peek<F>(&mut self, observer: F) -> Result<Self>
    where
        F: FnMut(&T) + 'static,
    {
        let source = self.take_source("peek")?;
        Ok(Self::from_provider(Peek::new(source, observer)))
    }

    /// Collapses runs of consecutive equal elements to their first member.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn adjacent_distinct(&mut self) -> Result<Self>
    where
        T: PartialEq + Clone,
    {
        let source = self.take_source("adjacent_distinct")?;
        Ok(Self::from_provider(AdjacentDistinct::new(source, T::eq)))
    }

    /// [`adjacent_distinct`](Self::adjacent_distinct) under a custom
    /// equivalence predicate.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn adjacent_distinct_by<F>(&mut self, equivalence: F) -> Result<Self>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool + 'static,
    {
        let source = self.take_source("adjacent_distinct_by")?;
        Ok(Self::from_provider(AdjacentDistinct::new(
            source,
            equivalence,
        )))
    }

    /// Emits the difference of each adjacent pair.
    ///
    /// `[a0, a1, a2]` becomes `[a1 - a0, a2 - a1]`; fewer than two elements
    /// yield an empty stream.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn adjacent_difference(&mut self) -> Result<Self>
    where
        T: Sub<Output = T> + Clone,
    {
        let source = self.take_source("adjacent_difference")?;
        Ok(Self::from_provider(AdjacentDifference::new(
            source,
            |current: &T, previous: &T| current.clone() - previous.clone(),
        )))
    }

    /// [`adjacent_difference`](Self::adjacent_difference) with a custom
    /// combiner `f(&current, &previous)`; the output type may differ.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn adjacent_difference_by<U, F>(&mut self, combine: F) -> Result<Stream<U>>
    where
        U: 'static,
        F: FnMut(&T, &T) -> U + 'static,
    {
        let source = self.take_source("adjacent_difference_by")?;
        Ok(Stream::from_provider(AdjacentDifference::new(
            source, combine,
        )))
    }

    /// Emits the running sum: `[a0, a0 + a1, a0 + a1 + a2, …]`.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn partial_sum(&mut self) -> Result<Self>
    where
        T: Add<Output = T> + Clone,
    {
        let source = self.take_source("partial_sum")?;
        Ok(Self::from_provider(PartialSum::new(
            source,
            |running: &T, next: &T| running.clone() + next.clone(),
        )))
    }

    /// [`partial_sum`](Self::partial_sum) with a custom accumulator
    /// `f(&running, &next)`.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn partial_sum_by<F>(&mut self, combine: F) -> Result<Self>
    where
        T: Clone,
        F: FnMut(&T, &T) -> T + 'static,
    {
        let source = self.take_source("partial_sum_by")?;
        Ok(Self::from_provider(PartialSum::new(source, combine)))
    }

    /// Yields the whole upstream in ascending order.
    ///
    /// Buffering: the first pull drains the upstream completely, which must
    /// therefore be finite.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn sort(&mut self) -> Result<Self>
    where
        T: Ord,
    {
        let source = self.take_source("sort")?;
        Ok(Self::from_provider(Sort::new(source, T::cmp)))
    }

    /// [`sort`](Self::sort) under a custom comparator.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn sort_by<C>(&mut self, comparator: C) -> Result<Self>
    where
        C: FnMut(&T, &T) -> Ordering + 'static,
    {
        let source = self.take_source("sort_by")?;
        Ok(Self::from_provider(Sort::new(source, comparator)))
    }

    /// Yields each distinct element once, in ascending order.
    ///
    /// Note the reordering: the output is sorted, not in first-occurrence
    /// order. Buffering; the upstream must be finite.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    ///
    /// # Examples
    ///
    /// ```
    /// use rill_stream::{FromIter, Stream};
    ///
    /// # fn main() -> rill_core::Result<()> {
    /// let mut readings = Stream::from_provider(FromIter::new([3, 1, 3, 2, 1]));
    /// assert_eq!(readings.distinct()?.to_vec()?, vec![1, 2, 3]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn distinct(&mut self) -> Result<Self>
    where
        T: Ord,
    {
        let source = self.take_source("distinct")?;
        Ok(Self::from_provider(Distinct::new(source, T::cmp)))
    }

    /// [`distinct`](Self::distinct) under a custom comparator.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn distinct_by<C>(&mut self, comparator: C) -> Result<Self>
    where
        C: FnMut(&T, &T) -> Ordering + 'static,
    {
        let source = self.take_source("distinct_by")?;
        Ok(Self::from_provider(Distinct::new(source, comparator)))
    }

    /// Materializes the upstream at this point and replays it.
    ///
    /// Everything above the checkpoint runs exactly once, on the first
    /// pull. Buffering; the upstream must be finite.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn state_point(&mut self) -> Result<Self> {
        let source = self.take_source("state_point")?;
        Ok(Self::from_provider(StatePoint::new(source)))
    }

    /// Chunks the stream into consecutive `[T; N]` groups.
    ///
    /// A trailing partial group is dropped.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    ///
    /// # Panics
    ///
    /// Panics when `N < 2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rill_stream::{FromIter, Stream};
    ///
    /// # fn main() -> rill_core::Result<()> {
    /// let mut numbers = Stream::from_provider(FromIter::new(1..=7));
    /// let pairs = numbers.group::<2>()?.to_vec()?;
    /// assert_eq!(pairs, vec![[1, 2], [3, 4], [5, 6]]); // 7 is dropped
    /// # Ok(())
    /// # }
    /// ```
    pub fn group<const N: usize>(&mut self) -> Result<Stream<[T; N]>> {
        let source = self.take_source("group")?;
        Ok(Stream::from_provider(Group::<_, N>::new(source)))
    }

    /// Chunks the stream into consecutive `Vec<T>` groups of a runtime
    /// size; a trailing partial group is dropped.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    ///
    /// # Panics
    ///
    /// Panics when `size == 0`.
    pub fn group_n(&mut self, size: usize) -> Result<Stream<Vec<T>>> {
        let source = self.take_source("group_n")?;
        Ok(Stream::from_provider(GroupN::new(source, size)))
    }

    /// Slides a `[T; N]` window over the stream, one element per step.
    ///
    /// Input shorter than `N` yields an empty stream.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    ///
    /// # Panics
    ///
    /// Panics when `N < 2`.
    pub fn overlap<const N: usize>(&mut self) -> Result<Stream<[T; N]>>
    where
        T: Clone,
    {
        let source = self.take_source("overlap")?;
        Ok(Stream::from_provider(Overlap::<_, N>::new(source)))
    }

    /// Slides a window of a runtime size over the stream.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    ///
    /// # Panics
    ///
    /// Panics when `size == 0`.
    pub fn overlap_n(&mut self, size: usize) -> Result<Stream<VecDeque<T>>>
    where
        T: Clone,
    {
        let source = self.take_source("overlap_n")?;
        Ok(Stream::from_provider(OverlapN::new(source, size)))
    }

    /// Pairs this stream with `other` element by element.
    ///
    /// Stops at the shorter of the two. Both streams are vacated.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when either stream is vacant.
    pub fn zip<U>(&mut self, other: &mut Stream<U>) -> Result<Stream<(T, U)>>
    where
        U: 'static,
    {
        let left = self.take_source("zip")?;
        let right = other.take_source("zip")?;
        Ok(Stream::from_provider(Zip::new(left, right, |a, b| (a, b))))
    }

    /// Combines this stream with `other` through a custom zipper.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when either stream is vacant.
    pub fn zip_with<U, O, F>(&mut self, other: &mut Stream<U>, zipper: F) -> Result<Stream<O>>
    where
        U: 'static,
        O: 'static,
        F: FnMut(T, U) -> O + 'static,
    {
        let left = self.take_source("zip_with")?;
        let right = other.take_source("zip_with")?;
        Ok(Stream::from_provider(Zip::new(left, right, zipper)))
    }

    /// Appends `other` after this stream ends. Both streams are vacated.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when either stream is vacant.
    ///
    /// # Examples
    ///
    /// ```
    /// use rill_stream::{FromIter, Stream};
    ///
    /// # fn main() -> rill_core::Result<()> {
    /// let mut head = Stream::from_provider(FromIter::new([1, 2]));
    /// let mut tail = Stream::from_provider(FromIter::new([3, 4]));
    /// assert_eq!(head.chain(&mut tail)?.to_vec()?, vec![1, 2, 3, 4]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn chain(&mut self, other: &mut Stream<T>) -> Result<Self> {
        let left = self.take_source("chain")?;
        let right = other.take_source("chain")?;
        Ok(Self::from_provider(Chain::new(left, right)))
    }
}
