// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Terminal operations: everything here drains the pipeline and vacates
//! the stream.

use std::cmp::Ordering;
use std::ops::{Add, Mul};

use rill_core::{Provider, Result, RillError};

use crate::slice::Slice;
use crate::stream::Stream;

impl<T: 'static> Stream<T> {
    /// Number of elements the pipeline yields.
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
    /// let mut numbers = Stream::from_provider(FromIter::new([10, 20, 30]));
    /// assert_eq!(numbers.count()?, 3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn count(&mut self) -> Result<usize> {
        let mut source = self.take_source("count")?;
        let mut total = 0;
        while source.advance() {
            total += 1;
        }
        Ok(total)
    }

    /// The first element of the stream.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant,
    /// [`RillError::EmptyStream`] when it yields nothing.
    pub fn first(&mut self) -> Result<T> {
        let mut source = self.take_source("first")?;
        source.pull().ok_or(RillError::empty("first"))
    }

    /// The last element of the stream; drains everything before it.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant,
    /// [`RillError::EmptyStream`] when it yields nothing.
    pub fn last(&mut self) -> Result<T> {
        let mut source = self.take_source("last")?;
        let mut latest = None;
        while let Some(value) = source.pull() {
            latest = Some(value);
        }
        latest.ok_or(RillError::empty("last"))
    }

    /// The element at zero-based position `index`.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant,
    /// [`RillError::EmptyStream`] when the stream is shorter than
    /// `index + 1`.
    pub fn nth(&mut self, index: usize) -> Result<T> {
        let source = self.take_source("nth")?;
        Stream::from_provider(Slice::new(source, index, None, 1))
            .first()
            .map_err(|e| e.relabel_empty("nth"))
    }

    /// Folds every element into `seed` with `combine`.
    ///
    /// An empty stream returns `seed` unchanged.
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
    /// let mut numbers = Stream::from_provider(FromIter::new([1, 2, 3, 4]));
    /// let digits = numbers.fold(String::new(), |mut out, n| {
    ///     out.push_str(&n.to_string());
    ///     out
    /// })?;
    /// assert_eq!(digits, "1234");
    /// # Ok(())
    /// # }
    /// ```
    pub fn fold<A, F>(&mut self, seed: A, mut combine: F) -> Result<A>
    where
        F: FnMut(A, T) -> A,
    {
        let mut source = self.take_source("fold")?;
        let mut accumulator = seed;
        while let Some(value) = source.pull() {
            accumulator = combine(accumulator, value);
        }
        Ok(accumulator)
    }

    /// Folds the stream with its own first element as the seed.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant,
    /// [`RillError::EmptyStream`] when it yields nothing.
    pub fn reduce<F>(&mut self, mut combine: F) -> Result<T>
    where
        F: FnMut(T, T) -> T,
    {
        let mut source = self.take_source("reduce")?;
        let mut accumulator = source.pull().ok_or(RillError::empty("reduce"))?;
        while let Some(value) = source.pull() {
            accumulator = combine(accumulator, value);
        }
        Ok(accumulator)
    }

    /// Folds the stream with `init(first_element)` as the seed.
    ///
    /// Sits between [`fold`](Self::fold) and [`reduce`](Self::reduce): the
    /// accumulator type may differ from the element type, but the seed is
    /// derived from the stream itself.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant,
    /// [`RillError::EmptyStream`] when it yields nothing.
    pub fn reduce_init<A, I, F>(&mut self, init: I, mut combine: F) -> Result<A>
    where
        I: FnOnce(T) -> A,
        F: FnMut(A, T) -> A,
    {
        let mut source = self.take_source("reduce_init")?;
        let first = source.pull().ok_or(RillError::empty("reduce_init"))?;
        let mut accumulator = init(first);
        while let Some(value) = source.pull() {
            accumulator = combine(accumulator, value);
        }
        Ok(accumulator)
    }

    /// The smallest element; the earliest one wins among equals.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant,
    /// [`RillError::EmptyStream`] when it yields nothing.
    pub fn min(&mut self) -> Result<T>
    where
        T: Ord,
    {
        let mut source = self.take_source("min")?;
        let mut best = source.pull().ok_or(RillError::empty("min"))?;
        while let Some(value) = source.pull() {
            if value < best {
                best = value;
            }
        }
        Ok(best)
    }

    /// [`min`](Self::min) under a custom comparator.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant,
    /// [`RillError::EmptyStream`] when it yields nothing.
    pub fn min_by<C>(&mut self, mut comparator: C) -> Result<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut source = self.take_source("min_by")?;
        let mut best = source.pull().ok_or(RillError::empty("min_by"))?;
        while let Some(value) = source.pull() {
            if comparator(&value, &best) == Ordering::Less {
                best = value;
            }
        }
        Ok(best)
    }

    /// The largest element; the latest one wins among equals.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant,
    /// [`RillError::EmptyStream`] when it yields nothing.
    pub fn max(&mut self) -> Result<T>
    where
        T: Ord,
    {
        let mut source = self.take_source("max")?;
        let mut best = source.pull().ok_or(RillError::empty("max"))?;
        while let Some(value) = source.pull() {
            if value >= best {
                best = value;
            }
        }
        Ok(best)
    }

    /// [`max`](Self::max) under a custom comparator.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant,
    /// [`RillError::EmptyStream`] when it yields nothing.
    pub fn max_by<C>(&mut self, mut comparator: C) -> Result<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut source = self.take_source("max_by")?;
        let mut best = source.pull().ok_or(RillError::empty("max_by"))?;
        while let Some(value) = source.pull() {
            if comparator(&value, &best) != Ordering::Less {
                best = value;
            }
        }
        Ok(best)
    }

    /// Both extremes in a single pass, as `(min, max)`.
    ///
    /// Tie-breaking matches [`min`](Self::min) and [`max`](Self::max).
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant,
    /// [`RillError::EmptyStream`] when it yields nothing.
    pub fn minmax(&mut self) -> Result<(T, T)>
    where
        T: Ord + Clone,
    {
        let source = self.take_source("minmax")?;
        Stream::from_box(source)
            .minmax_by(T::cmp)
            .map_err(|e| e.relabel_empty("minmax"))
    }

    /// [`minmax`](Self::minmax) under a custom comparator.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant,
    /// [`RillError::EmptyStream`] when it yields nothing.
    pub fn minmax_by<C>(&mut self, mut comparator: C) -> Result<(T, T)>
    where
        T: Clone,
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut source = self.take_source("minmax_by")?;
        let first = source.pull().ok_or(RillError::empty("minmax_by"))?;
        let mut smallest = first.clone();
        let mut largest = first;
        while let Some(value) = source.pull() {
            if comparator(&value, &smallest) == Ordering::Less {
                smallest = value;
            } else if comparator(&value, &largest) != Ordering::Less {
                largest = value;
            }
        }
        Ok((smallest, largest))
    }

    /// Adds every element together.
    ///
    /// Unlike `Iterator::sum` there is no zero to fall back on, so an
    /// empty stream is an error rather than a default value.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant,
    /// [`RillError::EmptyStream`] when it yields nothing.
    pub fn sum(&mut self) -> Result<T>
    where
        T: Add<Output = T>,
    {
        let mut source = self.take_source("sum")?;
        let mut total = source.pull().ok_or(RillError::empty("sum"))?;
        while let Some(value) = source.pull() {
            total = total + value;
        }
        Ok(total)
    }

    /// Multiplies every element together; empty streams are an error, as
    /// with [`sum`](Self::sum).
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant,
    /// [`RillError::EmptyStream`] when it yields nothing.
    pub fn product(&mut self) -> Result<T>
    where
        T: Mul<Output = T>,
    {
        let mut source = self.take_source("product")?;
        let mut total = source.pull().ok_or(RillError::empty("product"))?;
        while let Some(value) = source.pull() {
            total = total * value;
        }
        Ok(total)
    }

    /// Whether any element satisfies `predicate`; stops at the first hit.
    ///
    /// An empty stream answers `false`.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn any<F>(&mut self, mut predicate: F) -> Result<bool>
    where
        F: FnMut(T) -> bool,
    {
        let mut source = self.take_source("any")?;
        while let Some(value) = source.pull() {
            if predicate(value) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether every element satisfies `predicate`; stops at the first
    /// miss. An empty stream answers `true`.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn all<F>(&mut self, mut predicate: F) -> Result<bool>
    where
        F: FnMut(T) -> bool,
    {
        let mut source = self.take_source("all")?;
        while let Some(value) = source.pull() {
            if !predicate(value) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether no element satisfies `predicate`; stops at the first hit.
    /// An empty stream answers `true`.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn none<F>(&mut self, mut predicate: F) -> Result<bool>
    where
        F: FnMut(T) -> bool,
    {
        let mut source = self.take_source("none")?;
        while let Some(value) = source.pull() {
            if predicate(value) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether at least one element misses `predicate`; the negation of
    /// [`all`](Self::all). An empty stream answers `false`.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn not_all<F>(&mut self, mut predicate: F) -> Result<bool>
    where
        F: FnMut(T) -> bool,
    {
        let mut source = self.take_source("not_all")?;
        while let Some(value) = source.pull() {
            if !predicate(value) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Runs `action` on every element.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn for_each<F>(&mut self, mut action: F) -> Result<()>
    where
        F: FnMut(T),
    {
        let mut source = self.take_source("for_each")?;
        while let Some(value) = source.pull() {
            action(value);
        }
        Ok(())
    }

    /// Uniform sample of at most `max_size` elements, by reservoir
    /// sampling (Algorithm R).
    ///
    /// Streams with `max_size` or fewer elements come back whole. The same
    /// seed over the same stream reproduces the same sample; the order of
    /// the returned elements is unspecified.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn sample(&mut self, max_size: usize, seed: u64) -> Result<Vec<T>> {
        let mut source = self.take_source("sample")?;
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut reservoir = Vec::with_capacity(max_size);
        let mut seen = 0usize;
        while let Some(value) = source.pull() {
            seen += 1;
            if reservoir.len() < max_size {
                reservoir.push(value);
            } else {
                let slot = rng.usize(0..seen);
                if slot < max_size {
                    reservoir[slot] = value;
                }
            }
        }
        Ok(reservoir)
    }

    /// One element chosen uniformly from the stream.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant,
    /// [`RillError::EmptyStream`] when it yields nothing.
    pub fn random_element(&mut self, seed: u64) -> Result<T> {
        let source = self.take_source("random_element")?;
        let sampled = Stream::from_box(source).sample(1, seed)?;
        sampled
            .into_iter()
            .next()
            .ok_or(RillError::empty("random_element"))
    }
}
