// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The editor model and everything built on it.

// Attach sources.
pub mod editor;
pub mod render;
pub mod syntax_highlighting;
pub mod terminal_window;
pub mod viewport;

// Re-export.
pub use editor::*;
pub use render::*;
pub use syntax_highlighting::*;
pub use terminal_window::*;
pub use viewport::*;
