// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{disable_raw_mode, leave_screen_sequence};
use std::io::Write as _;

/// Put the terminal back the way the user had it: main screen, visible cursor,
/// cooked mode. Safe to call more than once.
pub fn restore_terminal() {
    let mut stdout = std::io::stdout();
    drop(stdout.write_all(leave_screen_sequence().as_bytes()));
    drop(stdout.flush());
    drop(disable_raw_mode());
}

/// Panic hook that restores the terminal first, then prints the panic and a backtrace
/// to stderr as a miette report. Without the restore the report would be drawn on the
/// alternate screen in raw mode and vanish on exit.
pub fn install_terminal_restoring_panic_hook() {
    miette::set_panic_hook();
    let report_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        report_panic(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_hook_restores_and_reports_panic() {
        install_terminal_restoring_panic_hook();
        let result = std::panic::catch_unwind(|| panic!("boom"));
        drop(std::panic::take_hook());

        assert!(result.is_err());
        assert!(!crate::is_raw_mode_enabled());
    }

    #[test]
    #[serial]
    fn test_restore_is_idempotent() {
        restore_terminal();
        restore_terminal();
        assert!(!crate::is_raw_mode_enabled());
    }
}
