// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::VecDeque;

use rill_stream::Stream;
use rill_test_utils::{drain_stream, VecSource};

fn ints(values: &[i32]) -> Stream<i32> {
    Stream::from_provider(VecSource::new(values.to_vec()))
}

#[test]
fn test_group_chunks_into_disjoint_arrays() {
    // Arrange
    let mut numbers = ints(&[1, 2, 3, 4, 5, 6]);

    // Act
    let pairs = numbers.group::<2>().unwrap();

    // Assert
    assert_eq!(drain_stream(pairs), vec![[1, 2], [3, 4], [5, 6]]);
}

#[test]
fn test_group_drops_a_trailing_partial_chunk() {
    // Arrange
    let mut numbers = ints(&[1, 2, 3, 4, 5, 6, 7]);

    // Act
    let triples = numbers.group::<3>().unwrap();

    // Assert: 7 never comes out.
    assert_eq!(drain_stream(triples), vec![[1, 2, 3], [4, 5, 6]]);
}

#[test]
fn test_group_emits_floor_of_length_over_size_chunks() {
    // Arrange
    let mut numbers = ints(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);

    // Act
    let mut quads = numbers.group::<4>().unwrap();

    // Assert
    assert_eq!(quads.count().unwrap(), 2);
}

#[test]
fn test_group_shorter_than_one_chunk_is_empty() {
    // Arrange
    let mut numbers = ints(&[1, 2]);

    // Act
    let mut triples = numbers.group::<3>().unwrap();

    // Assert
    assert_eq!(triples.count().unwrap(), 0);
}

#[test]
fn test_group_n_chunks_with_a_runtime_size() {
    // Arrange
    let mut numbers = ints(&[1, 2, 3, 4, 5]);

    // Act
    let pairs = numbers.group_n(2).unwrap();

    // Assert
    assert_eq!(drain_stream(pairs), vec![vec![1, 2], vec![3, 4]]);
}

#[test]
#[should_panic(expected = "group size must be at least 2")]
fn test_group_rejects_width_one() {
    let mut numbers = ints(&[1, 2, 3]);
    let _ = numbers.group::<1>();
}

#[test]
fn test_overlap_slides_one_element_per_step() {
    // Arrange
    let mut numbers = ints(&[1, 2, 3, 4]);

    // Act
    let windows = numbers.overlap::<2>().unwrap();

    // Assert
    assert_eq!(drain_stream(windows), vec![[1, 2], [2, 3], [3, 4]]);
}

#[test]
fn test_overlap_with_a_wider_window() {
    // Arrange
    let mut numbers = ints(&[1, 2, 3, 4, 5]);

    // Act
    let windows = numbers.overlap::<3>().unwrap();

    // Assert
    assert_eq!(
        drain_stream(windows),
        vec![[1, 2, 3], [2, 3, 4], [3, 4, 5]]
    );
}

#[test]
fn test_overlap_shorter_than_the_window_is_empty() {
    // Arrange
    let mut numbers = ints(&[1, 2]);

    // Act
    let mut windows = numbers.overlap::<3>().unwrap();

    // Assert
    assert_eq!(windows.count().unwrap(), 0);
}

#[test]
fn test_overlap_n_yields_deque_windows() {
    // Arrange
    let mut numbers = ints(&[1, 2, 3]);

    // Act
    let windows = numbers.overlap_n(2).unwrap();

    // Assert
    let expected: Vec<VecDeque<i32>> =
        vec![VecDeque::from([1, 2]), VecDeque::from([2, 3])];
    assert_eq!(drain_stream(windows), expected);
}

#[test]
fn test_windows_compose_with_downstream_transforms() {
    // Arrange
    let mut numbers = ints(&[1, 2, 3, 4]);

    // Act
    let sums = numbers
        .overlap::<2>()
        .unwrap()
        .map(|[a, b]| a + b)
        .unwrap();

    // Assert
    assert_eq!(drain_stream(sums), vec![3, 5, 7]);
}
