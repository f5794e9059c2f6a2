// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod editor_error;
pub mod miette_setup_global_report_handler;

// Re-export.
pub use editor_error::*;
pub use miette_setup_global_report_handler::*;
