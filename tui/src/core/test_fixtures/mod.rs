// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Mocks used by this crate's tests and by crates that build on it.

// Attach.
pub mod output_device_fixtures;

// Re-export.
pub use output_device_fixtures::*;
