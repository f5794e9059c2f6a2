// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod diagnostics;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use diagnostics::*;
pub use tracing_config::*;
pub use tracing_init::*;
