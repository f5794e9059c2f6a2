// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The kernel: the event loop that owns the editor state, the threads that feed it,
//! and the seams (key policies, prompts) that front ends plug into.

/// Log every event the kernel loop receives.
pub const DEBUG_RAWED_KERNEL: bool = false;

// Attach.
pub mod editor_state;
pub mod input_reader_thread;
pub mod kernel_event;
pub mod kernel_runner;
pub mod key_policy;
pub mod main_event_loop;
pub mod prompt;
#[cfg(unix)]
pub mod resize_watcher_thread;

// Re-export.
pub use editor_state::*;
pub use input_reader_thread::*;
pub use kernel_event::*;
pub use kernel_runner::*;
pub use key_policy::*;
pub use main_event_loop::*;
pub use prompt::*;
#[cfg(unix)]
pub use resize_watcher_thread::*;
