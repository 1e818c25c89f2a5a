// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::{Provider, RillError};
use rill_stream::{Sort, Stream};
use rill_test_utils::VecSource;

fn ints(values: &[i32]) -> Stream<i32> {
    Stream::from_provider(VecSource::new(values.to_vec()))
}

#[test]
fn test_pipeline_of_a_bare_source() {
    // Arrange
    let numbers = ints(&[1, 2, 3]);

    // Act
    let rendered = numbers.pipeline().unwrap();

    // Assert
    assert_eq!(
        rendered,
        "[vec source]\nStream pipeline with 0 stage(s) and 1 source(s).\n"
    );
}

#[test]
fn test_pipeline_indents_stacked_stages() {
    // Arrange
    let mut numbers = ints(&[1, 2, 3]);
    let stacked = numbers
        .map(|n| n * 2)
        .unwrap()
        .filter(|n| *n > 2)
        .unwrap();

    // Act
    let rendered = stacked.pipeline().unwrap();

    // Assert
    assert_eq!(
        rendered,
        "Filter:\n  Map:\n    [vec source]\nStream pipeline with 2 stage(s) and 1 source(s).\n"
    );
}

#[test]
fn test_pipeline_shows_both_sides_of_a_zip() {
    // Arrange
    let mut left = ints(&[1, 2]);
    let mut right = ints(&[3, 4]);
    let zipped = left.zip(&mut right).unwrap();

    // Act
    let rendered = zipped.pipeline().unwrap();

    // Assert
    assert_eq!(
        rendered,
        "Zip:\n  [vec source]\n  [vec source]\nStream pipeline with 1 stage(s) and 2 source(s).\n"
    );
}

#[test]
fn test_pipeline_labels_set_operations_by_strategy() {
    // Arrange
    let mut left = ints(&[1, 2]);
    let mut right = ints(&[2, 3]);
    let merged = left.merge(&mut right).unwrap();

    // Act
    let rendered = merged.pipeline().unwrap();

    // Assert
    assert_eq!(
        rendered,
        "Merge:\n  [vec source]\n  [vec source]\nStream pipeline with 1 stage(s) and 2 source(s).\n"
    );
}

#[test]
fn test_pipeline_descends_into_combinator_arms() {
    // Arrange
    let mut left = ints(&[1, 2, 3]);
    let mut filtered = left.filter(|n| n % 2 == 1).unwrap();
    let mut right = ints(&[2, 3]);
    let combined = filtered.merge(&mut right).unwrap();

    // Act
    let rendered = combined.pipeline().unwrap();

    // Assert
    assert_eq!(
        rendered,
        "Merge:\n  Filter:\n    [vec source]\n  [vec source]\nStream pipeline with 2 stage(s) and 2 source(s).\n"
    );
}

#[test]
fn test_pipeline_renders_a_chain() {
    // Arrange
    let mut head = ints(&[1]);
    let mut tail = ints(&[2]);
    let joined = head.chain(&mut tail).unwrap();

    // Act & Assert
    assert_eq!(
        joined.pipeline().unwrap(),
        "Chain:\n  [vec source]\n  [vec source]\nStream pipeline with 1 stage(s) and 2 source(s).\n"
    );
}

#[test]
fn test_pipeline_does_not_vacate_the_stream() {
    // Arrange
    let mut numbers = ints(&[1, 2, 3]);

    // Act: describe twice, then still drain normally.
    let first = numbers.pipeline().unwrap();
    let second = numbers.pipeline().unwrap();

    // Assert
    assert_eq!(first, second);
    assert!(numbers.is_occupied());
    assert_eq!(numbers.to_vec().unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_pipeline_on_a_vacant_stream_fails() {
    // Arrange
    let vacant = Stream::<i32>::vacant();

    // Act & Assert
    assert_eq!(
        vacant.pipeline().unwrap_err(),
        RillError::vacant("pipeline")
    );
}

#[test]
fn test_buffering_stages_describe_their_buffer_after_the_drain() {
    // Arrange
    let mut sorted = Sort::new(VecSource::new(vec![2, 1]), i32::cmp);
    assert!(sorted.advance());

    // Act
    let mut out = String::new();
    let info = sorted.describe(&mut out, 0);

    // Assert: the upstream is gone; the buffer stands in as the source.
    assert_eq!(out, "Sort:\n  [sorted buffer]\n");
    assert_eq!(info.stages, 1);
    assert_eq!(info.sources, 1);
}
