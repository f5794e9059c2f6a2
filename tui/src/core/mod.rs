// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal plumbing shared by the editor: escape sequences, input decoding, raw mode,
//! sizes, errors and diagnostics.

// Attach sources.
pub mod ansi;
pub mod common;
pub mod dimens;
pub mod log;
pub mod term;
pub mod terminal_io;
pub mod test_fixtures;

// Re-export.
pub use ansi::*;
pub use common::*;
pub use dimens::*;
pub use log::*;
pub use term::*;
pub use terminal_io::*;
pub use test_fixtures::*;
