// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # rawed_tui
//!
//! The kernel of a raw mode terminal text editor.
//!
//! Bytes from the terminal are decoded into logical [`Key`]s, either by the state
//! machine [`Decoder`] or by the buffering [`TableDecoder`]. A [`Document`] holds the
//! rows, and every row carries a tab expanded render string plus one
//! [`HighlightClass`] per render char. Highlighting is recomputed eagerly on each
//! edit, and a multi-line comment opened or closed on one row repaints every row
//! below that depends on it. The [`Viewport`] maps char indices to screen columns
//! and scrolls just enough to keep the cursor visible, and the [`Renderer`] turns all
//! of that into escape sequences.
//!
//! The [`Kernel`] owns the state. A reader thread and a `SIGWINCH` thread feed it
//! [`KernelEvent`]s over a channel, and key bindings live outside this crate behind
//! the [`KeyPolicy`] trait.
//!
//! ```text
//! terminal bytes ─▶ Decoder ─▶ KernelEvent ─▶ Kernel ─▶ KeyPolicy chain
//!                                               │            │
//!                                               │   Document / Viewport
//!                                               ▼
//!                                           Renderer ─▶ terminal bytes
//! ```
//!
//! Logging goes through an explicit [`Diagnostics`] collector, there is no global
//! subscriber.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod tui;

// Re-export stable public API using glob imports for a flat API surface.
pub use core::*;
pub use tui::*;
