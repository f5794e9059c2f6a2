// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod alternate_screen_guard;
pub mod output_device;
pub mod panic_hook;

// Re-export.
pub use alternate_screen_guard::*;
pub use output_device::*;
pub use panic_hook::*;
