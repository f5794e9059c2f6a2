// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod color_scheme;
pub mod renderer;

// Re-export.
pub use color_scheme::*;
pub use renderer::*;
