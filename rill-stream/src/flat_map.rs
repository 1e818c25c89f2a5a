// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{write_indented, BoxProvider, PipelineInfo, Provider};

use crate::logging::warn;
use crate::stream::Stream;

/// Maps every upstream element to a nested stream and drains each nested
/// stream fully before pulling the next outer element.
///
/// A vacant nested stream is logged and treated as empty rather than
/// aborting the pipeline.
pub struct FlatMap<P, F, U> {
    upstream: P,
    transform: F,
    inner: Option<BoxProvider<U>>,
    current: Option<U>,
}

impl<P, F, U> FlatMap<P, F, U>
where
    P: Provider,
    F: FnMut(P::Item) -> Stream<U>,
{
    pub const fn new(upstream: P, transform: F) -> Self {
        Self {
            upstream,
            transform,
            inner: None,
            current: None,
        }
    }
}

impl<P, F, U> Provider for FlatMap<P, F, U>
where
    P: Provider,
    F: FnMut(P::Item) -> Stream<U>,
{
    type Item = U;

    fn advance(&mut self) -> bool {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(value) = inner.pull() {
                    self.current = Some(value);
                    return true;
                }
                self.inner = None;
            }
            match self.upstream.pull() {
                Some(outer) => match (self.transform)(outer).into_source() {
                    Some(provider) => self.inner = Some(provider),
                    None => warn!("flat_map: nested stream is vacant; treating it as empty"),
                },
                None => {
                    self.current = None;
                    return false;
                }
            }
        }
    }

    fn take(&mut self) -> Option<Self::Item> {
        self.current.take()
    }

    fn describe(&self, out: &mut String, depth: usize) -> PipelineInfo {
        // Nested pipelines are built per element and are not part of the
        // static description.
        write_indented(out, depth, "FlatMap:");
        self.upstream.describe(out, depth + 1).add_stage()
    }
}
