// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words EINTR

use super::DecodeError;
use std::io::{BufRead, ErrorKind};

/// Reads one Unicode scalar at a time from a byte stream.
///
/// Malformed UTF-8 (bad lead byte, bad continuation, or a stream that ends mid
/// character) is reported as [`char::REPLACEMENT_CHARACTER`] rather than as an
/// error. `EINTR` is retried.
#[derive(Debug)]
pub struct RuneReader<R> {
    reader: R,
}

impl<R: BufRead> RuneReader<R> {
    pub fn new(reader: R) -> Self { Self { reader } }

    /// `Ok(None)` at end of stream.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Io`] if the underlying read fails.
    pub fn read_rune(&mut self) -> Result<Option<char>, DecodeError> {
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };

        let Some(len) = utf8_sequence_len(lead) else {
            return Ok(Some(char::REPLACEMENT_CHARACTER));
        };

        let mut buf = [lead, 0, 0, 0];
        for slot in buf.iter_mut().take(len).skip(1) {
            match self.read_byte()? {
                Some(byte) => *slot = byte,
                None => return Ok(Some(char::REPLACEMENT_CHARACTER)),
            }
        }

        Ok(Some(
            std::str::from_utf8(&buf[..len])
                .ok()
                .and_then(|it| it.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        ))
    }

    fn read_byte(&mut self) -> Result<Option<u8>, DecodeError> {
        loop {
            let available = match self.reader.fill_buf() {
                Ok(it) => it,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(DecodeError::Io(e)),
            };
            let Some(&byte) = available.first() else {
                return Ok(None);
            };
            self.reader.consume(1);
            return Ok(Some(byte));
        }
    }
}

fn utf8_sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn read_all(bytes: &[u8]) -> Vec<char> {
        let mut reader = RuneReader::new(Cursor::new(bytes.to_vec()));
        let mut acc = vec![];
        while let Some(rune) = reader.read_rune().unwrap() {
            acc.push(rune);
        }
        acc
    }

    #[test]
    fn test_ascii_and_multibyte() {
        assert_eq!(read_all("aé😀".as_bytes()), vec!['a', 'é', '😀']);
    }

    #[test]
    fn test_invalid_lead_byte_is_replacement() {
        assert_eq!(read_all(&[0xFF, b'x']), vec![char::REPLACEMENT_CHARACTER, 'x']);
    }

    #[test]
    fn test_truncated_sequence_is_replacement() {
        assert_eq!(read_all(&[0xE2, 0x82]), vec![char::REPLACEMENT_CHARACTER]);
    }
}
