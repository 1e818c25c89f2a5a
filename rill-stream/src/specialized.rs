// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extensions that only exist on `Stream<bool>`.

use rill_core::{Provider, Result};

use crate::filter::Filter;
use crate::stream::Stream;

impl Stream<bool> {
    /// Keeps only the `true` elements.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when the stream is vacant.
    pub fn filter_true(&mut self) -> Result<Self> {
        let source = self.take_source("filter_true")?;
        Ok(Self::from_provider(Filter::new(source, |value: &bool| {
            *value
        })))
    }

    /// Whether any element is `true`; stops at the first one.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when the stream is vacant.
    pub fn any_true(&mut self) -> Result<bool> {
        let mut source = self.take_source("any_true")?;
        while let Some(value) = source.pull() {
            if value {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether every element is `true`; an empty stream answers `true`.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when the stream is vacant.
    pub fn all_true(&mut self) -> Result<bool> {
        let mut source = self.take_source("all_true")?;
        while let Some(value) = source.pull() {
            if !value {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether every element is `false`; an empty stream answers `true`.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when the stream is vacant.
    pub fn none_true(&mut self) -> Result<bool> {
        let mut source = self.take_source("none_true")?;
        while let Some(value) = source.pull() {
            if value {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether at least one element is `false`; an empty stream answers
    /// `false`.
    ///
    /// # Errors
    ///
    /// [`rill_core::RillError::VacantStream`] when the stream is vacant.
    pub fn not_all_true(&mut self) -> Result<bool> {
        let mut source = self.take_source("not_all_true")?;
        while let Some(value) = source.pull() {
            if !value {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
