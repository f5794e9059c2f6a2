// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logical key values produced by the decoders.

use crate::{CONTROL_CR, CONTROL_DEL, CONTROL_LF, CTRL_MASK, ANSI_ESC};
use std::fmt::{Display, Formatter, Result};

/// One resolved keystroke.
///
/// Anything that is not a recognized escape sequence is delivered as
/// [`Key::Char`] holding the code point that was read, so control characters like
/// `Ctrl+q` (`0x11`) and Enter (`0x0a`) are plain chars. Use [`ctrl()`] and the
/// constants below to name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Delete,
    PageUp,
    PageDown,
}

pub const ENTER: Key = Key::Char(CONTROL_LF as char);
pub const CARRIAGE_RETURN: Key = Key::Char(CONTROL_CR as char);
pub const BACKSPACE: Key = Key::Char(CONTROL_DEL as char);
pub const ESCAPE: Key = Key::Char(ANSI_ESC as char);
pub const TAB: Key = Key::Char('\t');

/// The key a terminal sends for `Ctrl` + `byte`, eg: `ctrl(b'q')` is `0x11`.
#[must_use]
pub const fn ctrl(byte: u8) -> Key { Key::Char((byte & CTRL_MASK) as char) }

impl Key {
    /// The code point, if this key is a literal one.
    #[must_use]
    pub fn as_char(self) -> Option<char> {
        match self {
            Key::Char(ch) => Some(ch),
            _ => None,
        }
    }

    /// True for literal keys that can be inserted into a row. Tab counts, other
    /// control characters don't.
    #[must_use]
    pub fn is_printable(self) -> bool {
        matches!(self, Key::Char(ch) if ch == '\t' || !ch.is_control())
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Key::Char(ch) if ch.is_control() => write!(f, "0x{:02x}", u32::from(*ch)),
            Key::Char(ch) => write!(f, "{ch}"),
            other => write!(f, "{other:?}"),
        }
    }
}
