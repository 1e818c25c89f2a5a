// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the rill stream library.
//!
//! This crate provides feeding providers, observation probes and test data
//! for exercising stream operators. It is designed for use in development and
//! testing only, not for production code.
//!
//! # Key Types
//!
//! ## `VecSource<T>`
//!
//! A provider fed directly from a vector, for driving operators and the
//! set-operation engine without going through the construction facade:
//!
//! ```rust
//! use rill_test_utils::{drain, VecSource};
//!
//! let source = VecSource::new(vec![1, 2, 3]);
//! assert_eq!(drain(source), vec![1, 2, 3]);
//! ```
//!
//! ## `Recorder<T>`
//!
//! A shared buffer for counting and inspecting observer invocations, used to
//! pin down how often side-effecting operators (peek, state points) actually
//! run:
//!
//! ```rust
//! use rill_test_utils::Recorder;
//!
//! let recorder = Recorder::new();
//! let mut sink = recorder.sink();
//! sink(&1);
//! sink(&2);
//! assert_eq!(recorder.values(), vec![1, 2]);
//! ```
//!
//! ## Fixtures
//!
//! `Person` values with name and age, for comparator-based operators:
//!
//! ```rust
//! use rill_test_utils::test_data::{person_alice, person_bob};
//!
//! assert!(person_alice().age < person_bob().age);
//! ```

pub mod helpers;
pub mod person;
pub mod recorder;
pub mod test_data;
pub mod vec_source;

pub use helpers::{drain, drain_n, drain_stream};
pub use person::Person;
pub use recorder::Recorder;
pub use vec_source::VecSource;
