// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          io::Write,
          sync::{Arc, MutexGuard, PoisonError}};

pub type StdMutex<T> = std::sync::Mutex<T>;
pub type SendRawTerminal = dyn Write + Send;
pub type SafeRawTerminal = Arc<StdMutex<SendRawTerminal>>;
pub type LockedOutputDevice<'a> = &'a mut dyn Write;

#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock()
    };
}

/// Where rendered frames are written. Real terminals use [`OutputDevice::new_stdout`],
/// tests use `OutputDevice::new_mock()` to capture the bytes.
#[derive(Clone)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub is_mock: bool,
}

impl Debug for OutputDevice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "OutputDevice {{ is_mock: {} }}", self.is_mock)
    }
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stdout())),
            is_mock: false,
        }
    }

    /// A writer that panicked mid frame leaves nothing inconsistent behind, so a
    /// poisoned lock is simply taken over.
    pub fn lock(&self) -> MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write one complete chunk (eg: a frame) and flush it.
    ///
    /// # Errors
    ///
    /// Returns the underlying write error.
    pub fn write_and_flush(&self, bytes: &[u8]) -> std::io::Result<()> {
        let out: LockedOutputDevice<'_> = lock_output_device_as_mut!(self);
        out.write_all(bytes)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputDeviceExt;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stdout_output_device_is_not_mock() {
        let device = OutputDevice::new_stdout();
        assert!(!device.is_mock);
    }

    #[test]
    fn test_write_and_flush_to_mock() {
        let (device, mock) = OutputDevice::new_mock();
        device.write_and_flush(b"\x1b[H").unwrap();
        device.write_and_flush(b"hello").unwrap();
        assert!(device.is_mock);
        assert_eq!(mock.get_copy_of_buffer_as_string(), "\x1b[Hhello");
    }
}
