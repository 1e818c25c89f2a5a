// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pipeline introspection support.
//!
//! Every provider can render itself into a textual tree and report how many
//! transform stages and leaf sources its subtree contains. Streams expose the
//! combined result through their `pipeline` operation.

use std::ops::Add;

/// Stage and source tally for a provider subtree.
///
/// Leaf providers report themselves with [`PipelineInfo::source`]; transform
/// stages add themselves on top of their upstream tally with
/// [`PipelineInfo::add_stage`]; combinators sum both upstream tallies before
/// counting themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineInfo {
    /// Number of transform and combinator stages in the subtree.
    pub stages: usize,
    /// Number of leaf sources in the subtree.
    pub sources: usize,
}

impl PipelineInfo {
    /// Tally for a single leaf source.
    #[must_use]
    pub const fn source() -> Self {
        Self {
            stages: 0,
            sources: 1,
        }
    }

    /// Counts one more stage on top of this tally.
    #[must_use]
    pub const fn add_stage(self) -> Self {
        Self {
            stages: self.stages + 1,
            sources: self.sources,
        }
    }

    /// One-line summary of the tally.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Stream pipeline with {} stage(s) and {} source(s).",
            self.stages, self.sources
        )
    }
}

impl Add for PipelineInfo {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            stages: self.stages + rhs.stages,
            sources: self.sources + rhs.sources,
        }
    }
}

/// Appends `label` to `out` as one line at the given indentation depth.
///
/// Two spaces per depth level, matching the tree layout produced by
/// `Provider::describe` implementations.
pub fn write_indented(out: &mut String, depth: usize, label: &str) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(label);
    out.push('\n');
}
