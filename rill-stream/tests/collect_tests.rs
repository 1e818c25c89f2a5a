// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::{BTreeSet, HashMap, VecDeque};

use rill_stream::{FromIter, Stream};
use rill_test_utils::test_data::people_by_age;
use rill_test_utils::VecSource;

fn ints(values: &[i32]) -> Stream<i32> {
    Stream::from_provider(VecSource::new(values.to_vec()))
}

#[test]
fn test_to_vec_preserves_stream_order() {
    // Arrange
    let mut numbers = ints(&[3, 1, 2]);

    // Act & Assert
    assert_eq!(numbers.to_vec().unwrap(), vec![3, 1, 2]);
}

#[test]
fn test_to_vec_on_empty_gives_an_empty_vec() {
    // Arrange
    let mut nothing = ints(&[]);

    // Act & Assert
    assert_eq!(nothing.to_vec().unwrap(), Vec::<i32>::new());
}

#[test]
fn test_to_deque_preserves_stream_order() {
    // Arrange
    let mut numbers = ints(&[3, 1, 2]);

    // Act & Assert
    assert_eq!(numbers.to_deque().unwrap(), VecDeque::from([3, 1, 2]));
}

#[test]
fn test_to_set_deduplicates_and_orders() {
    // Arrange
    let mut readings = ints(&[3, 1, 3, 2, 1]);

    // Act
    let unique = readings.to_set().unwrap();

    // Assert
    assert_eq!(unique, BTreeSet::from([1, 2, 3]));
}

#[test]
fn test_collect_into_a_string() {
    // Arrange
    let mut letters = Stream::from_provider(FromIter::new(['r', 'i', 'l', 'l']));

    // Act & Assert
    assert_eq!(letters.collect::<String>().unwrap(), "rill");
}

#[test]
fn test_collect_into_a_map_from_pairs() {
    // Arrange
    let mut people = Stream::from_provider(VecSource::new(people_by_age()));

    // Act
    let ages: HashMap<String, u32> = people
        .map(|p| (p.name, p.age))
        .unwrap()
        .collect()
        .unwrap();

    // Assert
    assert_eq!(ages.len(), 5);
    assert_eq!(ages["Alice"], 25);
    assert_eq!(ages["Diane"], 40);
}

#[test]
fn test_extend_into_appends_to_an_existing_collection() {
    // Arrange
    let mut numbers = ints(&[3, 4]);
    let mut sink = vec![1, 2];

    // Act
    numbers.extend_into(&mut sink).unwrap();

    // Assert
    assert_eq!(sink, vec![1, 2, 3, 4]);
}

#[test]
fn test_joined_interposes_the_separator() {
    // Arrange
    let mut numbers = ints(&[1, 2, 3]);

    // Act & Assert
    assert_eq!(numbers.joined(", ").unwrap(), "1, 2, 3");
}

#[test]
fn test_joined_on_a_single_element_has_no_separator() {
    // Arrange
    let mut single = ints(&[42]);

    // Act & Assert
    assert_eq!(single.joined(", ").unwrap(), "42");
}

#[test]
fn test_joined_on_empty_is_the_empty_string() {
    // Arrange
    let mut nothing = ints(&[]);

    // Act & Assert
    assert_eq!(nothing.joined(", ").unwrap(), "");
}

#[test]
fn test_joined_uses_display_rendering() {
    // Arrange
    let mut people = Stream::from_provider(VecSource::new(people_by_age()));

    // Act
    let line = people.limit(2).unwrap().joined(" | ").unwrap();

    // Assert
    assert_eq!(line, "Person[name=Alice, age=25] | Person[name=Dave, age=28]");
}
