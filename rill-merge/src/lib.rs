// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
mod difference;
mod intersection;
mod merge;
mod set_operation;
mod symmetric_difference;
mod union;

pub use difference::{difference, DifferenceStrategy};
pub use intersection::{intersection, IntersectionStrategy};
pub use merge::{merge, MergeStrategy};
pub use set_operation::{Advance, Depletion, SetOpContext, SetOpStrategy, SetOperation, UpdateState};
pub use symmetric_difference::{symmetric_difference, SymmetricDifferenceStrategy};
pub use union::{union, UnionStrategy};
