// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Convenience macros over the construction facade.

/// Builds an occupied stream from listed elements, `vec!`-style.
///
/// `stream![]` is an empty stream, `stream![a, b, c]` streams the listed
/// values and `stream![value; n]` repeats a clone of `value` `n` times.
///
/// # Examples
///
/// ```
/// # fn main() -> rill::Result<()> {
/// let mut listed = rill::stream![1, 2, 3];
/// assert_eq!(listed.to_vec()?, vec![1, 2, 3]);
///
/// let mut repeated = rill::stream!["ha"; 3];
/// assert_eq!(repeated.joined("")?, "hahaha");
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! stream {
    () => {
        $crate::make::empty()
    };
    ($value:expr; $count:expr) => {
        $crate::make::repeat_n($value, $count)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::make::from_iter(vec![$($value),+])
    };
}

/// Zips two to five streams into a stream of flat tuples.
///
/// Expands to nested [`zip`](rill_stream::Stream::zip) calls with
/// flattening zippers, so `zip_all!(a, b, c)` yields `(A, B, C)` rather
/// than `((A, B), C)`. Stops at the shortest input; every argument stream
/// is vacated.
///
/// # Examples
///
/// ```
/// # fn main() -> rill::Result<()> {
/// let mut ids = rill::make::counter(1u32);
/// let mut names = rill::stream!["ana", "bo"];
/// let mut scores = rill::stream![9.5, 7.0];
///
/// let mut rows = rill::zip_all!(ids, names, scores)?;
/// assert_eq!(rows.to_vec()?, vec![(1, "ana", 9.5), (2, "bo", 7.0)]);
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! zip_all {
    ($a:expr, $b:expr $(,)?) => {
        ($a).zip(&mut $b)
    };
    ($a:expr, $b:expr, $c:expr $(,)?) => {
        ($a)
            .zip(&mut $b)
            .and_then(|mut pair| pair.zip_with(&mut $c, |(a, b), c| (a, b, c)))
    };
    ($a:expr, $b:expr, $c:expr, $d:expr $(,)?) => {
        $crate::zip_all!($a, $b, $c)
            .and_then(|mut triple| triple.zip_with(&mut $d, |(a, b, c), d| (a, b, c, d)))
    };
    ($a:expr, $b:expr, $c:expr, $d:expr, $e:expr $(,)?) => {
        $crate::zip_all!($a, $b, $c, $d)
            .and_then(|mut quad| quad.zip_with(&mut $e, |(a, b, c, d), e| (a, b, c, d, e)))
    };
}
