// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sorted-stream set operations on the stream handle.
//!
//! All of these require both inputs to be sorted ascending under the
//! comparator in use; outputs are sorted the same way. The plain variants
//! use `T::cmp`, the `_by` variants take an explicit comparator. Both
//! streams are vacated.

use std::cmp::Ordering;

use rill_core::Result;
use rill_merge::{difference, intersection, merge, symmetric_difference, union};

use crate::stream::Stream;

impl<T: 'static> Stream<T> {
    /// Interleaves two sorted streams into one sorted stream, keeping
    /// duplicates from both sides.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when either stream is vacant.
    pub fn merge(&mut self, other: &mut Stream<T>) -> Result<Self>
    where
        T: Ord,
    {
        let left = self.take_source("merge")?;
        let right = other.take_source("merge")?;
        Ok(Self::from_provider(merge(left, right, T::cmp)))
    }

    /// [`merge`](Self::merge) under a custom comparator.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when either stream is vacant.
    pub fn merge_by<C>(&mut self, other: &mut Stream<T>, comparator: C) -> Result<Self>
    where
        C: FnMut(&T, &T) -> Ordering + 'static,
    {
        let left = self.take_source("merge_by")?;
        let right = other.take_source("merge_by")?;
        Ok(Self::from_provider(merge(left, right, comparator)))
    }

    /// Set union of two sorted streams: every element present on either
    /// side, ties collapsed to a single element.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when either stream is vacant.
    ///
    /// # Examples
    ///
    /// ```
    /// use rill_stream::{FromIter, Stream};
    ///
    /// # fn main() -> rill_core::Result<()> {
    /// let mut left = Stream::from_provider(FromIter::new([1, 2, 3, 4, 5]));
    /// let mut right = Stream::from_provider(FromIter::new([2, 3, 4, 6, 7]));
    /// assert_eq!(left.union(&mut right)?.to_vec()?, vec![1, 2, 3, 4, 5, 6, 7]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn union(&mut self, other: &mut Stream<T>) -> Result<Self>
    where
        T: Ord,
    {
        let left = self.take_source("union")?;
        let right = other.take_source("union")?;
        Ok(Self::from_provider(union(left, right, T::cmp)))
    }

    /// [`union`](Self::union) under a custom comparator.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when either stream is vacant.
    pub fn union_by<C>(&mut self, other: &mut Stream<T>, comparator: C) -> Result<Self>
    where
        C: FnMut(&T, &T) -> Ordering + 'static,
    {
        let left = self.take_source("union_by")?;
        let right = other.take_source("union_by")?;
        Ok(Self::from_provider(union(left, right, comparator)))
    }

    /// Set intersection of two sorted streams: only the elements present
    /// on both sides.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when either stream is vacant.
    pub fn intersection(&mut self, other: &mut Stream<T>) -> Result<Self>
    where
        T: Ord,
    {
        let left = self.take_source("intersection")?;
        let right = other.take_source("intersection")?;
        Ok(Self::from_provider(intersection(left, right, T::cmp)))
    }

    /// [`intersection`](Self::intersection) under a custom comparator.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when either stream is vacant.
    pub fn intersection_by<C>(&mut self, other: &mut Stream<T>, comparator: C) -> Result<Self>
    where
        C: FnMut(&T, &T) -> Ordering + 'static,
    {
        let left = self.take_source("intersection_by")?;
        let right = other.take_source("intersection_by")?;
        Ok(Self::from_provider(intersection(left, right, comparator)))
    }

    /// Set difference of two sorted streams: the elements of this stream
    /// not present in `other`.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when either stream is vacant.
    ///
    /// # Examples
    ///
    /// ```
    /// use rill_stream::{FromIter, Stream};
    ///
    /// # fn main() -> rill_core::Result<()> {
    /// let mut left = Stream::from_provider(FromIter::new([1, 2, 3, 4, 5]));
    /// let mut right = Stream::from_provider(FromIter::new([2, 3, 4]));
    /// assert_eq!(left.difference(&mut right)?.to_vec()?, vec![1, 5]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn difference(&mut self, other: &mut Stream<T>) -> Result<Self>
    where
        T: Ord,
    {
        let left = self.take_source("difference")?;
        let right = other.take_source("difference")?;
        Ok(Self::from_provider(difference(left, right, T::cmp)))
    }

    /// [`difference`](Self::difference) under a custom comparator.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when either stream is vacant.
    pub fn difference_by<C>(&mut self, other: &mut Stream<T>, comparator: C) -> Result<Self>
    where
        C: FnMut(&T, &T) -> Ordering + 'static,
    {
        let left = self.take_source("difference_by")?;
        let right = other.take_source("difference_by")?;
        Ok(Self::from_provider(difference(left, right, comparator)))
    }

    /// Symmetric difference of two sorted streams: the elements present on
    /// exactly one side.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when either stream is vacant.
    pub fn symmetric_difference(&mut self, other: &mut Stream<T>) -> Result<Self>
    where
        T: Ord,
    {
        let left = self.take_source("symmetric_difference")?;
        let right = other.take_source("symmetric_difference")?;
        Ok(Self::from_provider(symmetric_difference(left, right, T::cmp)))
    }

    /// [`symmetric_difference`](Self::symmetric_difference) under a custom
    /// comparator.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when either stream is vacant.
    pub fn symmetric_difference_by<C>(
        &mut self,
        other: &mut Stream<T>,
        comparator: C,
    ) -> Result<Self>
    where
        C: FnMut(&T, &T) -> Ordering + 'static,
    {
        let left = self.take_source("symmetric_difference_by")?;
        let right = other.take_source("symmetric_difference_by")?;
        Ok(Self::from_provider(symmetric_difference(
            left, right, comparator,
        )))
    }
}
