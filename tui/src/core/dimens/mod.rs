// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod col_width;
pub mod dim;
pub mod row_height;

// Re-export.
pub use col_width::*;
pub use dim::*;
pub use row_height::*;
