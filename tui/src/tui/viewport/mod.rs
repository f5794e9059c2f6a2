// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod coordinates;
pub mod viewport;

// Re-export.
pub use coordinates::*;
pub use viewport::*;
