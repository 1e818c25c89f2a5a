// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::RillError;
use rill_stream::Stream;
use rill_test_utils::VecSource;

fn ints(values: &[i32]) -> Stream<i32> {
    Stream::from_provider(VecSource::new(values.to_vec()))
}

#[test]
fn test_try_iter_yields_every_element() {
    // Arrange
    let mut numbers = ints(&[1, 2, 3]);

    // Act
    let collected: Vec<i32> = numbers.try_iter().unwrap().collect();

    // Assert
    assert_eq!(collected, vec![1, 2, 3]);
}

#[test]
fn test_try_iter_vacates_the_stream() {
    // Arrange
    let mut numbers = ints(&[1, 2, 3]);

    // Act
    let _iter = numbers.try_iter().unwrap();

    // Assert
    assert!(!numbers.is_occupied());
}

#[test]
fn test_try_iter_on_a_vacant_stream_fails() {
    // Arrange
    let mut vacant = Stream::<i32>::vacant();

    // Act & Assert
    assert_eq!(
        vacant.try_iter().unwrap_err(),
        RillError::vacant("try_iter")
    );
}

#[test]
fn test_for_loop_sugar_over_a_stream() {
    // Arrange
    let mut numbers = ints(&[1, 2, 3]);
    let doubled = numbers.map(|n| n * 2).unwrap();
    let mut seen = Vec::new();

    // Act
    for value in doubled {
        seen.push(value);
    }

    // Assert
    assert_eq!(seen, vec![2, 4, 6]);
}

#[test]
#[should_panic(expected = "vacant")]
fn test_into_iter_on_a_vacant_stream_panics() {
    let vacant = Stream::<i32>::vacant();
    let _ = vacant.into_iter();
}

#[test]
fn test_current_borrows_without_consuming() {
    // Arrange
    let mut numbers = ints(&[10, 20]);
    let mut iter = numbers.try_iter().unwrap();

    // Act & Assert: repeated peeks see the same element.
    assert_eq!(iter.current().unwrap(), &10);
    assert_eq!(iter.current().unwrap(), &10);

    // The peeked element is still delivered by next.
    assert_eq!(iter.next(), Some(10));
    assert_eq!(iter.current().unwrap(), &20);
    assert_eq!(iter.next(), Some(20));
}

#[test]
fn test_current_after_exhaustion_is_a_consumed_iterator_error() {
    // Arrange
    let mut numbers = ints(&[1]);
    let mut iter = numbers.try_iter().unwrap();

    // Act
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), None);
    let result = iter.current();

    // Assert
    assert_eq!(result.unwrap_err(), RillError::consumed("current"));
}

#[test]
fn test_current_on_an_empty_stream_is_a_consumed_iterator_error() {
    // Arrange
    let mut nothing = ints(&[]);
    let mut iter = nothing.try_iter().unwrap();

    // Act & Assert
    assert_eq!(
        iter.current().unwrap_err(),
        RillError::consumed("current")
    );
}

#[test]
fn test_iterator_is_fused() {
    // Arrange
    let mut numbers = ints(&[1]);
    let mut iter = numbers.try_iter().unwrap();

    // Act & Assert
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_adapters_work_on_stream_iterators() {
    // Arrange
    let mut numbers = ints(&[1, 2, 3, 4, 5]);

    // Act
    let even_squares: Vec<i32> = numbers
        .try_iter()
        .unwrap()
        .filter(|n| n % 2 == 0)
        .map(|n| n * n)
        .collect();

    // Assert
    assert_eq!(even_squares, vec![4, 16]);
}

#[test]
fn test_consumed_iterator_display_is_readable() {
    // Arrange
    let mut nothing = ints(&[]);
    let mut iter = nothing.try_iter().unwrap();

    // Act
    let message = iter.current().unwrap_err().to_string();

    // Assert
    assert_eq!(
        message,
        "cannot invoke `current` on a consumed stream iterator"
    );
}
