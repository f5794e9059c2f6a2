// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape sequences written to the terminal by the renderer and the terminal guards.

/// DEC mode 1049: switch to the alternate screen buffer.
pub const ENTER_ALTERNATE_SCREEN: &str = "\x1b[?1049h";

/// DEC mode 1049: switch back to the main screen buffer.
pub const EXIT_ALTERNATE_SCREEN: &str = "\x1b[?1049l";

/// DEC mode 25: hide the cursor.
pub const HIDE_CURSOR: &str = "\x1b[?25l";

/// DEC mode 25: show the cursor.
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// CUP with no params: move to the top left cell.
pub const CURSOR_HOME: &str = "\x1b[H";

/// ED 2: erase the whole screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// EL 0: erase from the cursor to the end of the line.
pub const CLEAR_LINE: &str = "\x1b[K";

/// SGR with no params: reset all attributes.
pub const SGR_RESET: &str = "\x1b[m";

/// SGR parameter for inverse video.
pub const SGR_INVERSE: u8 = 7;

/// SGR parameter for the terminal's default foreground color.
pub const SGR_DEFAULT_FG: u8 = 39;

/// Line terminator for raw mode output (`OPOST` is off, so `\n` alone won't return).
pub const CRLF: &str = "\r\n";

/// `ESC [ {row} ; {col} H` with 1-indexed coordinates.
#[must_use]
pub fn cursor_position(row_one_based: usize, col_one_based: usize) -> String {
    format!("\x1b[{row_one_based};{col_one_based}H")
}

/// `ESC [ {n} m`.
#[must_use]
pub fn sgr(param: u8) -> String { format!("\x1b[{param}m") }

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cursor_position_is_one_based() {
        assert_eq!(cursor_position(1, 1), "\x1b[1;1H");
        assert_eq!(cursor_position(12, 40), "\x1b[12;40H");
    }

    #[test]
    fn test_sgr() {
        assert_eq!(sgr(SGR_INVERSE), "\x1b[7m");
        assert_eq!(sgr(SGR_DEFAULT_FG), "\x1b[39m");
    }
}
