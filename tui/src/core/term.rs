// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Queries about the controlling terminal.

use crate::{ColWidth, Size, height, width};

pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// Width used for layout of error reports, falls back to [`DEFAULT_WIDTH`].
#[must_use]
pub fn get_terminal_width() -> ColWidth {
    match get_size() {
        Ok(size) => size.col_width,
        Err(_) => width(DEFAULT_WIDTH),
    }
}

/// Get the terminal size via `TIOCGWINSZ` on stdout.
///
/// # Errors
///
/// Returns an error if stdout is not a terminal or the ioctl fails.
#[cfg(unix)]
pub fn get_size() -> miette::Result<Size> {
    let winsize = rustix::termios::tcgetwinsize(std::io::stdout())
        .map_err(|e| miette::miette!("tcgetwinsize failed: {}", e))?;
    Ok(width(winsize.ws_col) + height(winsize.ws_row))
}

#[cfg(not(unix))]
pub fn get_size() -> miette::Result<Size> {
    Ok(width(DEFAULT_WIDTH) + height(DEFAULT_HEIGHT))
}

/// Size to start with when the real one is unknown (eg: stdout is not a tty).
#[must_use]
pub fn get_size_or_default() -> Size {
    get_size()
        .ok()
        .filter(|it| *it.col_width > 0 && *it.row_height > 0)
        .unwrap_or_else(|| width(DEFAULT_WIDTH) + height(DEFAULT_HEIGHT))
}
