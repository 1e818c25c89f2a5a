// Copyright 2025 The Rill Developers
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod describe;
pub mod error;
pub mod provider;

pub use self::describe::{write_indented, PipelineInfo};
pub use self::error::{Result, RillError};
pub use self::provider::{BoxProvider, Provider};
