// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The document model: rows, edits, undo and search.

// Attach.
pub mod change;
pub mod damage;
pub mod document;
pub mod editor_config;
pub mod history;
pub mod row;
pub mod search;

// Re-export.
pub use change::*;
pub use damage::*;
pub use document::*;
pub use editor_config::*;
pub use history::*;
pub use row::*;
pub use search::*;
