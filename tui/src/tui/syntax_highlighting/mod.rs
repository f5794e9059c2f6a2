// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod highlight_class;
pub mod highlighter;
pub mod syntax_definition;

// Re-export.
pub use highlight_class::*;
pub use highlighter::*;
pub use syntax_definition::*;
