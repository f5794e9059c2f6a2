// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CLEAR_SCREEN, CURSOR_HOME, ENTER_ALTERNATE_SCREEN, EXIT_ALTERNATE_SCREEN,
            OutputDevice, SGR_RESET, SHOW_CURSOR};

/// Scoped alternate screen. On drop, attributes are reset, the cursor is shown and the
/// main screen (with the user's scrollback) comes back.
#[derive(Debug)]
pub struct AlternateScreenGuard {
    output_device: OutputDevice,
}

impl AlternateScreenGuard {
    /// # Errors
    ///
    /// Returns the write error if the escape sequences can't be written.
    pub fn new(output_device: OutputDevice) -> std::io::Result<Self> {
        output_device.write_and_flush(
            format!("{ENTER_ALTERNATE_SCREEN}{CLEAR_SCREEN}{CURSOR_HOME}").as_bytes(),
        )?;
        Ok(Self { output_device })
    }
}

/// Bytes that undo everything the editor does to the screen.
#[must_use]
pub fn leave_screen_sequence() -> String {
    format!("{SGR_RESET}{SHOW_CURSOR}{EXIT_ALTERNATE_SCREEN}")
}

impl Drop for AlternateScreenGuard {
    fn drop(&mut self) {
        drop(
            self.output_device
                .write_and_flush(leave_screen_sequence().as_bytes()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputDeviceExt;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_enter_and_leave() {
        let (device, mock) = OutputDevice::new_mock();
        {
            let _guard = AlternateScreenGuard::new(device).unwrap();
            assert_eq!(
                mock.get_copy_of_buffer_as_string(),
                "\x1b[?1049h\x1b[2J\x1b[H"
            );
        }
        assert_eq!(
            mock.get_copy_of_buffer_as_string(),
            "\x1b[?1049h\x1b[2J\x1b[H\x1b[m\x1b[?25h\x1b[?1049l"
        );
    }
}
