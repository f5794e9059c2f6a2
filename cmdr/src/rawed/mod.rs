// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod clap_config;
pub mod filetypes;
pub mod key_policies;
pub mod launcher;
pub mod ui_str;

// Re-export.
pub use clap_config::*;
pub use filetypes::*;
pub use key_policies::*;
pub use launcher::*;
