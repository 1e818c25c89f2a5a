// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Terminal operations that gather the stream into a container.

use std::collections::{BTreeSet, VecDeque};
use std::fmt::Display;

use rill_core::{Provider, Result};

use crate::stream::Stream;

impl<T> Stream<T> {
    fn drained<B>(&mut self, operation: &'static str) -> Result<B>
    where
        B: FromIterator<T>,
    {
        let mut source = self.take_source(operation)?;
        Ok(std::iter::from_fn(move || source.pull()).collect())
    }

    /// Collects the stream into a `Vec`, in stream order.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when the stream is vacant.
    ///
    /// # Examples
    ///
    /// ```
    /// use rill_stream::{FromIter, Stream};
    ///
    /// # fn main() -> rill_core::Result<()> {
    /// let mut numbers = Stream::from_provider(FromIter::new(1..=4));
    /// assert_eq!(numbers.to_vec()?, vec![1, 2, 3, 4]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_vec(&mut self) -> Result<Vec<T>> {
        self.drained("to_vec")
    }

    /// Collects the stream into a `VecDeque`, in stream order.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when the stream is vacant.
    pub fn to_deque(&mut self) -> Result<VecDeque<T>> {
        self.drained("to_deque")
    }

    /// Collects the stream into a `BTreeSet`, deduplicating and ordering
    /// by `Ord`.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when the stream is vacant.
    pub fn to_set(&mut self) -> Result<BTreeSet<T>>
    where
        T: Ord,
    {
        self.drained("to_set")
    }

    /// Collects the stream into any `FromIterator` container.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when the stream is vacant.
    ///
    /// # Examples
    ///
    /// ```
    /// use rill_stream::{FromIter, Stream};
    ///
    /// # fn main() -> rill_core::Result<()> {
    /// let mut letters = Stream::from_provider(FromIter::new(['r', 'i', 'l', 'l']));
    /// assert_eq!(letters.collect::<String>()?, "rill");
    /// # Ok(())
    /// # }
    /// ```
    pub fn collect<B>(&mut self) -> Result<B>
    where
        B: FromIterator<T>,
    {
        self.drained("collect")
    }

    /// Appends every element to an existing collection instead of building
    /// a new one.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when the stream is vacant.
    pub fn extend_into<E>(&mut self, sink: &mut E) -> Result<()>
    where
        E: Extend<T>,
    {
        let mut source = self.take_source("extend_into")?;
        sink.extend(std::iter::from_fn(move || source.pull()));
        Ok(())
    }

    /// Renders every element with `Display` and joins them on `separator`.
    ///
    /// An empty stream gives an empty string.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when the stream is vacant.
    pub fn joined(&mut self, separator: &str) -> Result<String>
    where
        T: Display,
    {
        let mut source = self.take_source("joined")?;
        let mut out = String::new();
        let mut first = true;
        while let Some(value) = source.pull() {
            if !first {
                out.push_str(separator);
            }
            out.push_str(&value.to_string());
            first = false;
        }
        Ok(out)
    }
}
