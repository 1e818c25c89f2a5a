// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_core::RillError;
use rill_stream::Stream;
use rill_test_utils::test_data::{by_age, people_by_age, person_alice, person_bob};
use rill_test_utils::{drain_stream, VecSource};

fn ints(values: &[i32]) -> Stream<i32> {
    Stream::from_provider(VecSource::new(values.to_vec()))
}

fn people() -> Stream<rill_test_utils::Person> {
    Stream::from_provider(VecSource::new(people_by_age()))
}

#[test]
fn test_merge_interleaves_and_keeps_duplicates() -> anyhow::Result<()> {
    // Arrange
    let mut left = ints(&[1, 1, 2, 3, 3, 4]);
    let mut right = ints(&[2, 4, 4, 6]);

    // Act
    let merged = left.merge(&mut right)?;

    // Assert
    assert_eq!(drain_stream(merged), vec![1, 1, 2, 2, 3, 3, 4, 4, 4, 6]);
    Ok(())
}

#[test]
fn test_merge_by_under_a_descending_comparator() -> anyhow::Result<()> {
    // Arrange
    let mut left = ints(&[5, 3, 1]);
    let mut right = ints(&[4, 2]);

    // Act
    let merged = left.merge_by(&mut right, |a, b| b.cmp(a))?;

    // Assert
    assert_eq!(drain_stream(merged), vec![5, 4, 3, 2, 1]);
    Ok(())
}

#[test]
fn test_union_collapses_elements_present_on_both_sides() -> anyhow::Result<()> {
    // Arrange
    let mut left = ints(&[1, 2, 3, 4, 5]);
    let mut right = ints(&[2, 3, 4, 6, 7]);

    // Act
    let combined = left.union(&mut right)?;

    // Assert
    assert_eq!(drain_stream(combined), vec![1, 2, 3, 4, 5, 6, 7]);
    Ok(())
}

#[test]
fn test_union_by_age_with_distinct_people() -> anyhow::Result<()> {
    // Arrange
    let mut left = people();
    let mut right = Stream::from_provider(VecSource::new(vec![person_alice(), person_bob()]));

    // Act
    let combined = left.union_by(&mut right, by_age)?;

    // Assert: both right-side people tie with fixtures already on the left.
    assert_eq!(drain_stream(combined), people_by_age());
    Ok(())
}

#[test]
fn test_intersection_keeps_only_shared_elements() -> anyhow::Result<()> {
    // Arrange
    let mut left = ints(&[1, 2, 3, 4, 5]);
    let mut right = ints(&[2, 3, 4, 6, 7]);

    // Act
    let shared = left.intersection(&mut right)?;

    // Assert
    assert_eq!(drain_stream(shared), vec![2, 3, 4]);
    Ok(())
}

#[test]
fn test_intersection_of_disjoint_streams_is_empty() -> anyhow::Result<()> {
    // Arrange
    let mut left = ints(&[1, 3, 5]);
    let mut right = ints(&[2, 4, 6]);

    // Act
    let mut shared = left.intersection(&mut right)?;

    // Assert
    assert_eq!(shared.count()?, 0);
    Ok(())
}

#[test]
fn test_difference_removes_right_side_elements() -> anyhow::Result<()> {
    // Arrange
    let mut left = ints(&[1, 2, 3, 4, 5]);
    let mut right = ints(&[2, 3, 4]);

    // Act
    let remaining = left.difference(&mut right)?;

    // Assert
    assert_eq!(drain_stream(remaining), vec![1, 5]);
    Ok(())
}

#[test]
fn test_difference_with_itself_is_empty() -> anyhow::Result<()> {
    // Arrange
    let mut left = people();
    let mut right = people();

    // Act
    let mut remaining = left.difference(&mut right)?;

    // Assert
    assert_eq!(remaining.count()?, 0);
    Ok(())
}

#[test]
fn test_symmetric_difference_keeps_single_sided_elements() -> anyhow::Result<()> {
    // Arrange
    let mut left = ints(&[1, 2, 3, 4, 5]);
    let mut right = ints(&[2, 3, 4, 6, 7]);

    // Act
    let exclusive = left.symmetric_difference(&mut right)?;

    // Assert
    assert_eq!(drain_stream(exclusive), vec![1, 5, 6, 7]);
    Ok(())
}

#[test]
fn test_symmetric_difference_by_age() -> anyhow::Result<()> {
    // Arrange
    let mut left = people();
    let mut right = Stream::from_provider(VecSource::new(vec![person_alice()]));

    // Act
    let exclusive = left.symmetric_difference_by(&mut right, by_age)?;

    // Assert
    let names: Vec<String> = drain_stream(exclusive)
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Dave", "Bob", "Charlie", "Diane"]);
    Ok(())
}

#[test]
fn test_set_operations_vacate_both_streams() -> anyhow::Result<()> {
    // Arrange
    let mut left = ints(&[1, 2]);
    let mut right = ints(&[2, 3]);

    // Act
    let _combined = left.union(&mut right)?;

    // Assert
    assert!(!left.is_occupied());
    assert!(!right.is_occupied());
    Ok(())
}

#[test]
fn test_set_operation_with_a_vacant_partner_fails() {
    // Arrange
    let mut occupied = ints(&[1, 2]);
    let mut vacant = Stream::<i32>::vacant();

    // Act
    let result = occupied.merge(&mut vacant);

    // Assert
    assert_eq!(result.unwrap_err(), RillError::vacant("merge"));
}
