// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Free-function constructors for streams.
//!
//! Everything here is infallible: constructing a stream never runs the
//! pipeline, it only decides where elements will come from once a terminal
//! operation pulls. Sources fall into four families:
//!
//! - fixed content: [`empty`], [`singleton`], [`repeat`], [`repeat_n`],
//!   [`from_iter`], [`cycle`], [`cycle_n`]
//! - computed: [`generate`], [`from_fn`], [`iterate`], [`recurrence`]
//! - arithmetic: [`counter`], [`counter_by`], [`range`], [`range_by`],
//!   [`closed_range`], [`closed_range_by`]
//! - random: [`randoms`], [`uniform_ints`], [`uniform_floats`],
//!   [`coin_flips`] and their `_seeded` twins
//!
//! The unseeded random constructors draw their seed from the operating
//! system; the `_seeded` twins produce the same stream for the same seed,
//! which is what tests want.

use std::ops::Add;

use num_traits::One;
use rand::distr::{Distribution, StandardUniform, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rill_stream::{
    Cycle, Empty, FromIter, Generate, RandomSource, Recurrence, Repeat, Singleton, Stream,
};

/// A stream with no elements.
#[must_use]
pub fn empty<T: 'static>() -> Stream<T> {
    Stream::from_provider(Empty::new())
}

/// A stream with exactly one element.
#[must_use]
pub fn singleton<T: 'static>(value: T) -> Stream<T> {
    Stream::from_provider(Singleton::new(value))
}

/// An endless stream of clones of `value`.
///
/// Bound it with [`Stream::limit`] or a data-dependent cut before any
/// terminal that drains to the end.
#[must_use]
pub fn repeat<T>(value: T) -> Stream<T>
where
    T: Clone + 'static,
{
    Stream::from_provider(Repeat::new(value))
}

/// `times` clones of `value`; zero gives an empty stream.
#[must_use]
pub fn repeat_n<T>(value: T, times: usize) -> Stream<T>
where
    T: Clone + 'static,
{
    Stream::from_provider(FromIter::new(std::iter::repeat(value).take(times)))
}

/// A stream over anything iterable, in iteration order.
///
/// # Examples
///
/// ```
/// # fn main() -> rill::Result<()> {
/// let mut from_vec = rill::make::from_iter(vec![1, 2, 3]);
/// let mut from_range = rill::make::from_iter(4..=6);
///
/// assert_eq!(from_vec.chain(&mut from_range)?.to_vec()?, vec![1, 2, 3, 4, 5, 6]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn from_iter<I>(items: I) -> Stream<I::Item>
where
    I: IntoIterator,
    I::Item: 'static,
    I::IntoIter: 'static,
{
    Stream::from_provider(FromIter::new(items))
}

/// Endlessly repeats the elements of `items` front to back.
#[must_use]
pub fn cycle<T>(items: Vec<T>) -> Stream<T>
where
    T: Clone + 'static,
{
    Stream::from_provider(Cycle::new(items, 0))
}

/// Repeats the elements of `items` a fixed number of `times`.
#[must_use]
pub fn cycle_n<T>(items: Vec<T>, times: usize) -> Stream<T>
where
    T: Clone + 'static,
{
    Stream::from_provider(Cycle::new(items, times))
}

/// An endless stream of values produced by calling `producer`.
#[must_use]
pub fn generate<T, F>(mut producer: F) -> Stream<T>
where
    T: 'static,
    F: FnMut() -> T + 'static,
{
    Stream::from_provider(Generate::new(move || Some(producer())))
}

/// A stream produced by calling `producer` until it returns `None`.
///
/// # Examples
///
/// ```
/// # fn main() -> rill::Result<()> {
/// let mut countdown = 3;
/// let mut stream = rill::make::from_fn(move || {
///     if countdown == 0 {
///         None
///     } else {
///         countdown -= 1;
///         Some(countdown)
///     }
/// });
/// assert_eq!(stream.to_vec()?, vec![2, 1, 0]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn from_fn<T, F>(producer: F) -> Stream<T>
where
    T: 'static,
    F: FnMut() -> Option<T> + 'static,
{
    Stream::from_provider(Generate::new(producer))
}

/// The endless orbit of `step` from `seed`: `seed`, `step(&seed)`, ….
///
/// # Examples
///
/// ```
/// # fn main() -> rill::Result<()> {
/// let mut doublings = rill::make::iterate(1, |n| n * 2);
/// assert_eq!(doublings.limit(5)?.to_vec()?, vec![1, 2, 4, 8, 16]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn iterate<T, F>(seed: T, mut step: F) -> Stream<T>
where
    T: Clone + 'static,
    F: FnMut(&T) -> T + 'static,
{
    Stream::from_provider(Recurrence::new([seed], move |window: &[T; 1]| {
        step(&window[0])
    }))
}

/// An order-`N` recurrence: the seeds first, then each element computed
/// from the previous `N`.
///
/// # Examples
///
/// ```
/// # fn main() -> rill::Result<()> {
/// let mut fibonacci = rill::make::recurrence([0i64, 1], |w| w[0] + w[1]);
/// assert_eq!(fibonacci.limit(8)?.to_vec()?, vec![0, 1, 1, 2, 3, 5, 8, 13]);
/// # Ok(())
/// # }
/// ```
///
/// # Panics
///
/// Panics when `N == 0`.
#[must_use]
pub fn recurrence<T, F, const N: usize>(seeds: [T; N], step: F) -> Stream<T>
where
    T: Clone + 'static,
    F: FnMut(&[T; N]) -> T + 'static,
{
    Stream::from_provider(Recurrence::new(seeds, step))
}

/// Counts endlessly upward from `start` in steps of one.
#[must_use]
pub fn counter<T>(start: T) -> Stream<T>
where
    T: Add<Output = T> + One + Clone + 'static,
{
    counter_by(start, T::one())
}

/// Counts endlessly from `start` in steps of `step`.
#[must_use]
pub fn counter_by<T>(start: T, step: T) -> Stream<T>
where
    T: Add<Output = T> + Clone + 'static,
{
    let mut next = Some(start);
    Stream::from_provider(Generate::new(move || {
        let current = next.take()?;
        next = Some(current.clone() + step.clone());
        Some(current)
    }))
}

/// The ascending half-open range `[start, end)` in steps of one.
///
/// A `start` at or past `end` gives an empty stream.
#[must_use]
pub fn range<T>(start: T, end: T) -> Stream<T>
where
    T: Add<Output = T> + One + PartialOrd + Clone + 'static,
{
    range_by(start, end, T::one())
}

/// The ascending half-open range `[start, end)` in steps of `step`.
#[must_use]
pub fn range_by<T>(start: T, end: T, step: T) -> Stream<T>
where
    T: Add<Output = T> + PartialOrd + Clone + 'static,
{
    let mut next = Some(start);
    Stream::from_provider(Generate::new(move || {
        let current = next.take()?;
        if current < end {
            next = Some(current.clone() + step.clone());
            Some(current)
        } else {
            None
        }
    }))
}

/// The ascending closed range `[start, end]` in steps of one.
#[must_use]
pub fn closed_range<T>(start: T, end: T) -> Stream<T>
where
    T: Add<Output = T> + One + PartialOrd + Clone + 'static,
{
    closed_range_by(start, end, T::one())
}

/// The ascending closed range `[start, end]` in steps of `step`.
///
/// The last element is the largest `start + k * step` not exceeding `end`.
#[must_use]
pub fn closed_range_by<T>(start: T, end: T, step: T) -> Stream<T>
where
    T: Add<Output = T> + PartialOrd + Clone + 'static,
{
    let mut next = Some(start);
    Stream::from_provider(Generate::new(move || {
        let current = next.take()?;
        if current <= end {
            next = Some(current.clone() + step.clone());
            Some(current)
        } else {
            None
        }
    }))
}

/// An endless stream sampling `distribution` with an OS-seeded engine.
#[must_use]
pub fn randoms<T, D>(distribution: D) -> Stream<T>
where
    T: 'static,
    D: Distribution<T> + 'static,
{
    Stream::from_provider(RandomSource::new(distribution, StdRng::from_os_rng()))
}

/// Like [`randoms`], reproducible for a given `seed`.
#[must_use]
pub fn randoms_seeded<T, D>(distribution: D, seed: u64) -> Stream<T>
where
    T: 'static,
    D: Distribution<T> + 'static,
{
    Stream::from_provider(RandomSource::new(
        distribution,
        StdRng::seed_from_u64(seed),
    ))
}

fn uniform_int(low: i64, high: i64) -> Uniform<i64> {
    assert!(
        low <= high,
        "uniform_ints: low must not exceed high, got {low}..={high}"
    );
    Uniform::new_inclusive(low, high).expect("inclusive integer bounds are valid")
}

fn uniform_float(low: f64, high: f64) -> Uniform<f64> {
    assert!(
        low.is_finite() && high.is_finite() && low < high,
        "uniform_floats: bounds must be finite with low < high, got {low}..{high}"
    );
    Uniform::new(low, high).expect("half-open float bounds are valid")
}

/// Endless integers drawn uniformly from `[low, high]`.
///
/// # Panics
///
/// Panics when `low > high`.
#[must_use]
pub fn uniform_ints(low: i64, high: i64) -> Stream<i64> {
    randoms(uniform_int(low, high))
}

/// Like [`uniform_ints`], reproducible for a given `seed`.
///
/// # Examples
///
/// ```
/// # fn main() -> rill::Result<()> {
/// let mut first = rill::make::uniform_ints_seeded(1, 6, 42);
/// let mut second = rill::make::uniform_ints_seeded(1, 6, 42);
///
/// let rolls = first.limit(10)?.to_vec()?;
/// assert_eq!(rolls, second.limit(10)?.to_vec()?);
/// assert!(rolls.iter().all(|r| (1..=6).contains(r)));
/// # Ok(())
/// # }
/// ```
///
/// # Panics
///
/// Panics when `low > high`.
#[must_use]
pub fn uniform_ints_seeded(low: i64, high: i64, seed: u64) -> Stream<i64> {
    randoms_seeded(uniform_int(low, high), seed)
}

/// Endless floats drawn uniformly from the half-open `[low, high)`.
///
/// # Panics
///
/// Panics when the bounds are not finite or `low >= high`.
#[must_use]
pub fn uniform_floats(low: f64, high: f64) -> Stream<f64> {
    randoms(uniform_float(low, high))
}

/// Like [`uniform_floats`], reproducible for a given `seed`.
///
/// # Panics
///
/// Panics when the bounds are not finite or `low >= high`.
#[must_use]
pub fn uniform_floats_seeded(low: f64, high: f64, seed: u64) -> Stream<f64> {
    randoms_seeded(uniform_float(low, high), seed)
}

/// An endless stream of fair coin flips.
#[must_use]
pub fn coin_flips() -> Stream<bool> {
    randoms(StandardUniform)
}

/// Like [`coin_flips`], reproducible for a given `seed`.
#[must_use]
pub fn coin_flips_seeded(seed: u64) -> Stream<bool> {
    randoms_seeded(StandardUniform, seed)
}
