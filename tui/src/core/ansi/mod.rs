// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod constants;
pub mod terminal_input_decoder;
pub mod terminal_raw_mode;

// Re-export.
pub use constants::*;
pub use terminal_input_decoder::*;
pub use terminal_raw_mode::*;
