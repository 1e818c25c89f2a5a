// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridging streams into `std::iter`.

use std::fmt;
use std::iter::FusedIterator;

use rill_core::{BoxProvider, Provider, Result, RillError};

use crate::logging::error;
use crate::stream::Stream;

/// Iterator over a stream's elements.
///
/// Obtained from [`Stream::try_iter`] or `IntoIterator`. The iterator is
/// fused: once `next` has returned `None` it keeps returning `None` and
/// the upstream is never pulled again.
pub struct Iter<T> {
    source: BoxProvider<T>,
    pending: Option<T>,
    exhausted: bool,
}

impl<T> Iter<T> {
    fn new(source: BoxProvider<T>) -> Self {
        Self {
            source,
            pending: None,
            exhausted: false,
        }
    }

    /// Borrows the element the next `next` call will return, pulling it
    /// from the pipeline if necessary but not consuming it.
    ///
    /// # Errors
    ///
    /// [`RillError::ConsumedIterator`] once the iterator is exhausted.
    pub fn current(&mut self) -> Result<&T> {
        if self.pending.is_none() && !self.exhausted {
            self.pending = self.source.pull();
            self.exhausted = self.pending.is_none();
        }
        self.pending.as_ref().ok_or(RillError::consumed("current"))
    }
}

impl<T> fmt::Debug for Iter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

impl<T> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(value) = self.pending.take() {
            return Some(value);
        }
        if self.exhausted {
            return None;
        }
        let value = self.source.pull();
        self.exhausted = value.is_none();
        value
    }
}

impl<T> FusedIterator for Iter<T> {}

impl<T> Stream<T> {
    /// Hands the pipeline over to a standard iterator, vacating the
    /// stream.
    ///
    /// The fallible twin of `IntoIterator`, for call sites that want the
    /// vacancy error instead of a panic.
    ///
    /// # Errors
    ///
    /// [`RillError::VacantStream`] when the stream is vacant.
    pub fn try_iter(&mut self) -> Result<Iter<T>> {
        Ok(Iter::new(self.take_source("try_iter")?))
    }
}

impl<T> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    /// # Panics
    ///
    /// Panics when the stream is vacant; `for` loops have no channel for
    /// the error. Use [`Stream::try_iter`] to keep it.
    fn into_iter(mut self) -> Iter<T> {
        match self.take_source("into_iter") {
            Ok(source) => Iter::new(source),
            Err(e) => {
                error!("{e}");
                panic!("into_iter called on a vacant stream");
            }
        }
    }
}
