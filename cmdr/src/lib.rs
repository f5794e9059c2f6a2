// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # rawed
//!
//! A small raw mode terminal text editor built on [`rawed_tui`]. This crate holds the
//! parts that are policy rather than engine: the command line, the built in file
//! types, and the key bindings for insert and command mode.
//!
//! ```text
//! rawed [file path] [-t <tab stop>] [--decoder state|table] [-l] [--log-file <path>]
//! ```
//!
//! | Keys            | Insert mode          | Command mode                   |
//! | --------------- | -------------------- | ------------------------------ |
//! | `Ctrl-q`        | quit                 | quit                           |
//! | `Ctrl-s`        | save                 | save                           |
//! | `Ctrl-f`        | find                 | find                           |
//! | `Ctrl-z`        | undo                 | undo                           |
//! | `Ctrl-o`        | enter command mode   |                                |
//! | `i`             | insert `i`           | back to insert mode            |
//! | `h j k l`       | insert the char      | move                           |
//! | `x`, `C`, `u`   | insert the char      | delete char, clear row, undo   |
//! | `e`, `/`, `s`   | insert the char      | open file, find, shell prompt  |
//!
//! With `--decoder table` a lone `Esc` also enters command mode (and cancels a
//! prompt). The default state machine decoder reads `Esc` as the start of an escape
//! sequence, so there `Ctrl-o` and `Ctrl-q` are the keys to use.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod rawed;

// Re-export.
pub use rawed::*;
