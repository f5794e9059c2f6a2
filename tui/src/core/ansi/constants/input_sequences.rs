// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte values that show up in the raw input stream of a VT100 compatible terminal.
//!
//! # Keyboard Sequences
//!
//! ## Arrow Keys (CSI A/B/C/D)
//! - Up: `ESC[A`
//! - Down: `ESC[B`
//! - Right: `ESC[C`
//! - Left: `ESC[D`
//!
//! ## Navigation Keys
//! - Home: `ESC[H`, `ESC[1~`, `ESC[7~`
//! - End: `ESC[F`, `ESC[4~`, `ESC[8~`
//! - Delete: `ESC[3~`
//! - Page Up: `ESC[5~`
//! - Page Down: `ESC[6~`

// ==================== ANSI Sequence Components ====================

/// ESC byte (27 in decimal, 0x1B in hex)
pub const ANSI_ESC: u8 = 0x1B;

/// CSI bracket byte: `[` (91 in decimal, 0x5B in hex)
pub const ANSI_CSI_BRACKET: u8 = b'[';

/// Function key terminator: `~` (126 in decimal, 0x7E in hex)
pub const ANSI_FUNCTION_KEY_TERMINATOR: u8 = b'~';

// ==================== Arrow Keys (CSI A/B/C/D) ====================

/// CSI A: Up arrow key final byte
pub const ARROW_UP_FINAL: u8 = b'A';

/// CSI B: Down arrow key final byte
pub const ARROW_DOWN_FINAL: u8 = b'B';

/// CSI C: Right arrow key final byte
pub const ARROW_RIGHT_FINAL: u8 = b'C';

/// CSI D: Left arrow key final byte
pub const ARROW_LEFT_FINAL: u8 = b'D';

// ==================== Navigation Keys ====================

/// CSI H: Home key final byte
pub const HOME_FINAL: u8 = b'H';

/// CSI F: End key final byte
pub const END_FINAL: u8 = b'F';

/// Lowest and highest parameter digit accepted in a `CSI n~` sequence.
pub const FUNCTION_KEY_DIGIT_MIN: u8 = b'1';
pub const FUNCTION_KEY_DIGIT_MAX: u8 = b'8';

/// `CSI 1~` / `CSI 7~`: Home
pub const HOME_CODE_1: u8 = 1;
pub const HOME_CODE_2: u8 = 7;

/// `CSI 3~`: Delete
pub const DELETE_CODE: u8 = 3;

/// `CSI 4~` / `CSI 8~`: End
pub const END_CODE_1: u8 = 4;
pub const END_CODE_2: u8 = 8;

/// `CSI 5~`: Page Up
pub const PAGE_UP_CODE: u8 = 5;

/// `CSI 6~`: Page Down
pub const PAGE_DOWN_CODE: u8 = 6;

// ==================== Control Characters ====================

/// Line feed, what most terminals send for Enter in raw mode.
pub const CONTROL_LF: u8 = 10;

/// Carriage return.
pub const CONTROL_CR: u8 = 13;

/// DEL, what most terminals send for Backspace.
pub const CONTROL_DEL: u8 = 127;

/// Mask that turns a letter into its Ctrl-combination (`Ctrl+q` = `q & 0x1f`).
pub const CTRL_MASK: u8 = 0x1F;
