// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cmp::Ordering;

use crate::person::Person;

pub fn person_alice() -> Person {
    Person::new("Alice".to_string(), 25)
}

pub fn person_dave() -> Person {
    Person::new("Dave".to_string(), 28)
}

pub fn person_bob() -> Person {
    Person::new("Bob".to_string(), 30)
}

pub fn person_charlie() -> Person {
    Person::new("Charlie".to_string(), 35)
}

pub fn person_diane() -> Person {
    Person::new("Diane".to_string(), 40)
}

/// All fixture people, ascending by age.
pub fn people_by_age() -> Vec<Person> {
    vec![
        person_alice(),
        person_dave(),
        person_bob(),
        person_charlie(),
        person_diane(),
    ]
}

/// Age comparator for ordering-sensitive operators.
pub fn by_age(a: &Person, b: &Person) -> Ordering {
    a.age.cmp(&b.age)
}

/// Name comparator for ordering-sensitive operators.
pub fn by_name(a: &Person, b: &Person) -> Ordering {
    a.name.cmp(&b.name)
}
