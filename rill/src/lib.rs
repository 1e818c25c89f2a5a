// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Rill
//!
//! A lazy stream processing library with composable pipelines, a friendly construction facade and thorough test coverage.
//!
//! ## Overview
//!
//! Rill provides a high-level API for building lazy, single-threaded
//! pipelines over sequences of values. It builds on the pull-based provider
//! engine in `rill-stream` and adds a construction facade ([`make`]) plus
//! literal-style macros ([`stream!`] and [`zip_all!`]).
//!
//! ## Design Philosophy
//!
//! Rill keeps a clean separation of concerns:
//!
//! - **Construction**: use [`make`] (or the [`stream!`] macro) to obtain
//!   occupied streams from values, containers, closures or random
//!   distributions
//! - **Transformation**: chain [`Stream`] operators freely; nothing is
//!   computed until a terminal operation pulls
//! - **Consumption**: terminal operations vacate the stream, so accidental
//!   double consumption surfaces as a [`RillError`] instead of silently
//!   yielding stale data
//!
//! ## Quick Start
//!
//! ```rust
//! use rill::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Lazily enumerate the naturals, keep the even ones, stop at three.
//!     let mut evens = make::counter(1u64).filter(|n| n % 2 == 0)?.limit(3)?;
//!     assert_eq!(evens.to_vec()?, vec![2, 4, 6]);
//!
//!     // Or list elements directly, vec!-style.
//!     let mut letters = rill::stream!['r', 'i', 'l', 'l'];
//!     assert_eq!(letters.collect::<String>()?, "rill");
//!     Ok(())
//! }
//! ```

pub mod make;

mod macros;

// Re-export core types
pub use rill_core::{BoxProvider, PipelineInfo, Provider, Result, RillError};

// Re-export the stream type and its external-iteration cursor
pub use rill_stream::{Iter, Stream};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::make;
    pub use crate::{stream, zip_all};
    pub use rill_core::{Result, RillError};
    pub use rill_stream::Stream;
}
