// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the rill stream library.
//!
//! All user-visible failures are variants of the root [`RillError`] type, each
//! carrying the name of the operation the caller attempted so the condition
//! can be reported precisely even across composed operations.
//!
//! # Examples
//!
//! ```
//! use rill_core::{Result, RillError};
//!
//! fn checked_first() -> Result<i32> {
//!     Err(RillError::empty("first"))
//! }
//!
//! let err = checked_first().unwrap_err();
//! assert_eq!(err.operation(), "first");
//! ```

/// Root error type for all rill operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RillError {
    /// An operation was invoked on a stream whose provider has already been
    /// consumed by an earlier operation.
    ///
    /// Vacancy is a programming error on the caller's side: every chaining or
    /// terminal operation consumes the stream it is called on, and the
    /// returned stream (for chaining operations) must be used from then on.
    #[error("cannot invoke `{operation}` on a vacant stream")]
    VacantStream {
        /// Name of the attempted operation.
        operation: &'static str,
    },

    /// A terminal operation that needs at least one element saw none.
    #[error("no terminal result for `{operation}` on an empty stream")]
    EmptyStream {
        /// Name of the attempted operation.
        operation: &'static str,
    },

    /// An external-iteration cursor was dereferenced after the underlying
    /// stream was exhausted.
    #[error("cannot invoke `{operation}` on a consumed stream iterator")]
    ConsumedIterator {
        /// Name of the attempted operation.
        operation: &'static str,
    },
}

impl RillError {
    /// Create a vacant-stream error for the given operation.
    #[must_use]
    pub const fn vacant(operation: &'static str) -> Self {
        Self::VacantStream { operation }
    }

    /// Create an empty-stream error for the given operation.
    #[must_use]
    pub const fn empty(operation: &'static str) -> Self {
        Self::EmptyStream { operation }
    }

    /// Create a consumed-iterator error for the given operation.
    #[must_use]
    pub const fn consumed(operation: &'static str) -> Self {
        Self::ConsumedIterator { operation }
    }

    /// Name of the operation this error was raised for.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::VacantStream { operation }
            | Self::EmptyStream { operation }
            | Self::ConsumedIterator { operation } => operation,
        }
    }

    /// Rewrites the operation name of an [`EmptyStream`](Self::EmptyStream)
    /// error, leaving every other variant untouched.
    ///
    /// Composite terminals are built from simpler ones (`nth` is a skip
    /// followed by `first`); this keeps the reported name the one the caller
    /// actually invoked.
    #[must_use]
    pub const fn relabel_empty(self, operation: &'static str) -> Self {
        match self {
            Self::EmptyStream { .. } => Self::EmptyStream { operation },
            other => other,
        }
    }
}

/// Specialized `Result` type for rill operations.
pub type Result<T> = std::result::Result<T, RillError>;
