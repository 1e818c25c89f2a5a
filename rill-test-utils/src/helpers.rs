// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::Provider;
use rill_stream::Stream;

/// Pulls a provider until exhaustion and collects everything it yields.
pub fn drain<P: Provider>(mut provider: P) -> Vec<P::Item> {
    let mut collected = Vec::new();
    while let Some(value) = provider.pull() {
        collected.push(value);
    }
    collected
}

/// Pulls at most `limit` elements, for exercising infinite providers.
pub fn drain_n<P: Provider>(mut provider: P, limit: usize) -> Vec<P::Item> {
    let mut collected = Vec::new();
    while collected.len() < limit {
        match provider.pull() {
            Some(value) => collected.push(value),
            None => break,
        }
    }
    collected
}

/// Consumes a stream into a vector, panicking on a vacant stream.
pub fn drain_stream<T: 'static>(mut stream: Stream<T>) -> Vec<T> {
    stream.to_vec().expect("stream should be occupied")
}
