// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Centralized ANSI/VT100 escape sequence constants.
//!
//! - **input_sequences**: bytes the terminal sends (escape sequence parts, control
//!   characters)
//! - **output_sequences**: sequences the editor writes (screen modes, cursor, SGR)

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod input_sequences;
mod output_sequences;

// Public re-exports (flat API) for convenience.
pub use input_sequences::*;
pub use output_sequences::*;
