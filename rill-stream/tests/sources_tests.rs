// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rand::distr::Uniform;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rill_core::RillError;
use rill_stream::{
    Cycle, Empty, FromIter, Generate, RandomSource, Recurrence, Repeat, Singleton, Stream,
};
use rill_test_utils::{drain_n, drain_stream};

#[test]
fn test_empty_yields_nothing() {
    // Arrange
    let mut stream = Stream::from_provider(Empty::<i32>::new());

    // Act & Assert
    assert_eq!(stream.count().unwrap(), 0);
}

#[test]
fn test_empty_first_is_empty_stream_error() {
    // Arrange
    let mut stream = Stream::from_provider(Empty::<i32>::new());

    // Act
    let result = stream.first();

    // Assert
    assert_eq!(result.unwrap_err(), RillError::empty("first"));
}

#[test]
fn test_singleton_yields_exactly_one_element() {
    // Arrange
    let stream = Stream::from_provider(Singleton::new(42));

    // Act & Assert
    assert_eq!(drain_stream(stream), vec![42]);
}

#[test]
fn test_repeat_yields_the_value_forever() {
    // Arrange
    let source = Repeat::new("tick");

    // Act
    let observed = drain_n(source, 4);

    // Assert
    assert_eq!(observed, vec!["tick", "tick", "tick", "tick"]);
}

#[test]
fn test_from_iter_preserves_order() {
    // Arrange
    let stream = Stream::from_provider(FromIter::new(vec![3, 1, 4, 1, 5]));

    // Act & Assert
    assert_eq!(drain_stream(stream), vec![3, 1, 4, 1, 5]);
}

#[test]
fn test_from_iter_accepts_ranges() {
    // Arrange
    let stream = Stream::from_provider(FromIter::new(1..=5));

    // Act & Assert
    assert_eq!(drain_stream(stream), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_cycle_repeats_the_sequence_a_fixed_number_of_times() {
    // Arrange
    let stream = Stream::from_provider(Cycle::new(vec![1, 2, 3], 2));

    // Act & Assert
    assert_eq!(drain_stream(stream), vec![1, 2, 3, 1, 2, 3]);
}

#[test]
fn test_cycle_zero_times_is_unbounded() {
    // Arrange
    let source = Cycle::new(vec![1, 2], 0);

    // Act
    let observed = drain_n(source, 5);

    // Assert
    assert_eq!(observed, vec![1, 2, 1, 2, 1]);
}

#[test]
fn test_cycle_of_an_empty_container_is_empty() {
    // Arrange
    let mut stream = Stream::from_provider(Cycle::new(Vec::<i32>::new(), 0));

    // Act & Assert
    assert_eq!(stream.count().unwrap(), 0);
}

#[test]
fn test_generate_runs_until_the_generator_declines() {
    // Arrange
    let mut remaining = 3;
    let stream = Stream::from_provider(Generate::new(move || {
        if remaining == 0 {
            None
        } else {
            remaining -= 1;
            Some(remaining)
        }
    }));

    // Act & Assert
    assert_eq!(drain_stream(stream), vec![2, 1, 0]);
}

#[test]
fn test_recurrence_fibonacci_through_the_facade() {
    // Arrange
    let mut fibonacci =
        Stream::from_provider(Recurrence::new([0i64, 1], |window: &[i64; 2]| {
            window[0] + window[1]
        }));

    // Act
    let observed = fibonacci.limit(8).unwrap().to_vec().unwrap();

    // Assert
    assert_eq!(observed, vec![0, 1, 1, 2, 3, 5, 8, 13]);
}

#[test]
fn test_random_source_is_deterministic_for_a_seed() {
    // Arrange
    let die = Uniform::new_inclusive(1, 6).unwrap();
    let first_run = RandomSource::new(die.clone(), StdRng::seed_from_u64(7));
    let second_run = RandomSource::new(die, StdRng::seed_from_u64(7));

    // Act
    let first = drain_n(first_run, 20);
    let second = drain_n(second_run, 20);

    // Assert
    assert_eq!(first, second);
    assert!(first.iter().all(|roll| (1..=6).contains(roll)));
}
