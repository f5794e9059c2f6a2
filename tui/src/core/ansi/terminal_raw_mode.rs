// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words cfmakeraw ECHONL IEXTEN IGNBRK IGNCR INLCR ISTRIP PARMRK BRKINT

//! Raw mode for the controlling terminal.
//!
//! In cooked mode the tty line discipline buffers input until Enter, echoes it,
//! turns `Ctrl+c` into a signal and `\n` into `\r\n`. The editor needs every byte as
//! soon as it is typed, unmodified, so it switches stdin into raw mode for as long as
//! it runs:
//!
//! | Flag                                | Effect when cleared                        |
//! | ----------------------------------- | ------------------------------------------ |
//! | `ICANON`                            | no line buffering                          |
//! | `ECHO`, `ECHONL`                    | typed keys are not echoed                  |
//! | `ISIG`                              | `Ctrl+c`, `Ctrl+z` arrive as bytes         |
//! | `IXON`                              | `Ctrl+s`, `Ctrl+q` arrive as bytes         |
//! | `IEXTEN`                            | `Ctrl+v` arrives as a byte                 |
//! | `ICRNL`                             | Enter arrives as `\r` would, untranslated  |
//! | `OPOST`                             | output needs explicit `\r\n`               |
//!
//! `VMIN = 1` and `VTIME = 0` make a read block until at least one byte is there.
//!
//! The settings found before the first [`enable_raw_mode`] are kept and put back by
//! [`disable_raw_mode`]. Prefer [`RawModeGuard`], which does that on drop.

use std::io;

#[cfg(unix)]
mod unix_impl {
    use std::{io,
              sync::{LazyLock, Mutex, MutexGuard, PoisonError}};
    use rustix::termios::{self, ControlModes, InputModes, LocalModes, OptionalActions,
                          OutputModes, SpecialCodeIndex, Termios};

    /// Settings to go back to. `Some` exactly while raw mode is on.
    static COOKED_TERMIOS: LazyLock<Mutex<Option<Termios>>> = LazyLock::new(|| Mutex::new(None));

    fn cooked_termios() -> MutexGuard<'static, Option<Termios>> {
        COOKED_TERMIOS.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn enable_raw_mode() -> io::Result<()> {
        let stdin = io::stdin();
        let cooked = termios::tcgetattr(&stdin)
            .map_err(|err| io::Error::other(format!("tcgetattr failed: {err}")))?;

        let mut raw = cooked.clone();
        make_raw(&mut raw);
        termios::tcsetattr(&stdin, OptionalActions::Now, &raw)
            .map_err(|err| io::Error::other(format!("tcsetattr failed: {err}")))?;

        let mut saved = cooked_termios();
        if saved.is_none() {
            *saved = Some(cooked);
        }
        Ok(())
    }

    pub fn disable_raw_mode() -> io::Result<()> {
        let Some(cooked) = cooked_termios().take() else {
            return Ok(());
        };
        termios::tcsetattr(io::stdin(), OptionalActions::Now, &cooked)
            .map_err(|err| io::Error::other(format!("tcsetattr failed: {err}")))
    }

    pub fn is_raw_mode_enabled() -> bool { cooked_termios().is_some() }

    /// Same flags as `cfmakeraw(3)`.
    pub fn make_raw(it: &mut Termios) {
        it.input_modes.remove(
            InputModes::IGNBRK
                | InputModes::BRKINT
                | InputModes::PARMRK
                | InputModes::ISTRIP
                | InputModes::INLCR
                | InputModes::IGNCR
                | InputModes::ICRNL
                | InputModes::IXON,
        );
        it.output_modes.remove(OutputModes::OPOST);
        it.local_modes.remove(
            LocalModes::ECHO
                | LocalModes::ECHONL
                | LocalModes::ICANON
                | LocalModes::ISIG
                | LocalModes::IEXTEN,
        );
        it.control_modes
            .remove(ControlModes::CSIZE | ControlModes::PARENB);
        it.control_modes.insert(ControlModes::CS8);
        it.special_codes[SpecialCodeIndex::VMIN] = 1;
        it.special_codes[SpecialCodeIndex::VTIME] = 0;
    }
}

/// Switch stdin to raw mode.
///
/// # Errors
///
/// Returns an error if stdin is not a terminal, its attributes can't be changed, or
/// the platform has no termios.
pub fn enable_raw_mode() -> io::Result<()> {
    #[cfg(unix)]
    return unix_impl::enable_raw_mode();

    #[cfg(not(unix))]
    return Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "raw mode needs termios",
    ));
}

/// Restore the settings saved by [`enable_raw_mode`]. A no-op when raw mode is off,
/// so it is fine to call from several cleanup paths.
///
/// # Errors
///
/// Returns an error if the saved attributes can't be applied.
pub fn disable_raw_mode() -> io::Result<()> {
    #[cfg(unix)]
    return unix_impl::disable_raw_mode();

    #[cfg(not(unix))]
    return Ok(());
}

#[must_use]
pub fn is_raw_mode_enabled() -> bool {
    #[cfg(unix)]
    return unix_impl::is_raw_mode_enabled();

    #[cfg(not(unix))]
    return false;
}

/// Raw mode for the lifetime of the guard.
///
/// ```no_run
/// use rawed_tui::{RawModeGuard, is_raw_mode_enabled};
///
/// {
///     let _guard = RawModeGuard::new().unwrap();
///     assert!(is_raw_mode_enabled());
/// }
/// assert!(!is_raw_mode_enabled());
/// ```
#[derive(Debug)]
pub struct RawModeGuard;

impl RawModeGuard {
    /// # Errors
    ///
    /// See [`enable_raw_mode`].
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) { drop(disable_raw_mode()); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_disable_without_enable_is_noop() {
        assert!(!is_raw_mode_enabled());
        disable_raw_mode().unwrap();
        disable_raw_mode().unwrap();
        assert!(!is_raw_mode_enabled());
    }

    #[cfg(unix)]
    #[test]
    fn test_make_raw_clears_line_discipline() {
        use rustix::termios::{InputModes, LocalModes, OutputModes, SpecialCodeIndex};

        // Any terminal will do as a template, the flags are checked on the copy.
        let Ok(mut it) = rustix::termios::tcgetattr(std::io::stdin()) else {
            return;
        };
        unix_impl::make_raw(&mut it);
        assert!(!it.local_modes.contains(LocalModes::ICANON));
        assert!(!it.local_modes.contains(LocalModes::ECHO));
        assert!(!it.local_modes.contains(LocalModes::ISIG));
        assert!(!it.input_modes.contains(InputModes::IXON));
        assert!(!it.input_modes.contains(InputModes::ICRNL));
        assert!(!it.output_modes.contains(OutputModes::OPOST));
        assert_eq!(it.special_codes[SpecialCodeIndex::VMIN], 1);
        assert_eq!(it.special_codes[SpecialCodeIndex::VTIME], 0);
    }
}
