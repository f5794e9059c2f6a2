// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape sequence decoder that buffers runes and matches them against a fixed table.
//!
//! This is an alternative to the state machine in [`super::decoder`]. Both produce the
//! same keys for every sequence in [`ESCAPE_SEQUENCE_TABLE`]. They differ on input that
//! is not in the table: this decoder never reports
//! [`DecodeError::InvalidEscape`], it hands the buffered runes back as literal keys
//! instead. That also means a lone `ESC` followed by an ordinary key comes out as
//! [`crate::ESCAPE`] followed by that key.

use super::{DecodeError, Key, KeyDecoder, RuneReader};
use crate::ANSI_ESC;
use smallvec::SmallVec;
use std::{collections::VecDeque, io::BufRead};

/// Upper bound on runes held while waiting for a sequence to resolve. Equal to the
/// longest entry in [`ESCAPE_SEQUENCE_TABLE`].
pub const MAX_PENDING_RUNES: usize = 4;

pub const ESCAPE_SEQUENCE_TABLE: &[(&str, Key)] = &[
    ("\x1b[A", Key::ArrowUp),
    ("\x1b[B", Key::ArrowDown),
    ("\x1b[C", Key::ArrowRight),
    ("\x1b[D", Key::ArrowLeft),
    ("\x1b[F", Key::End),
    ("\x1b[H", Key::Home),
    ("\x1b[1~", Key::Home),
    ("\x1b[7~", Key::Home),
    ("\x1b[3~", Key::Delete),
    ("\x1b[4~", Key::End),
    ("\x1b[8~", Key::End),
    ("\x1b[5~", Key::PageUp),
    ("\x1b[6~", Key::PageDown),
];

type PendingRunes = SmallVec<[char; MAX_PENDING_RUNES]>;

#[derive(Debug)]
pub struct TableDecoder<R> {
    runes: RuneReader<R>,
    pending: PendingRunes,
    flush: VecDeque<char>,
}

impl<R: BufRead> TableDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self {
            runes: RuneReader::new(reader),
            pending: PendingRunes::new(),
            flush: VecDeque::new(),
        }
    }

    fn flush_pending(&mut self) { self.flush.extend(self.pending.drain(..)); }
}

impl<R: BufRead> KeyDecoder for TableDecoder<R> {
    fn decode(&mut self) -> Result<Key, DecodeError> {
        loop {
            if let Some(rune) = self.flush.pop_front() {
                return Ok(Key::Char(rune));
            }

            let Some(rune) = self.runes.read_rune()? else {
                if self.pending.is_empty() {
                    return Err(DecodeError::StreamEnded);
                }
                self.flush_pending();
                continue;
            };

            let is_escape = u32::from(rune) == u32::from(ANSI_ESC);

            if self.pending.is_empty() {
                if is_escape {
                    self.pending.push(rune);
                    continue;
                }
                return Ok(Key::Char(rune));
            }

            // A new ESC can't continue the buffered sequence, but it may start one.
            if is_escape {
                self.flush_pending();
                self.pending.push(rune);
                continue;
            }

            self.pending.push(rune);
            let buffered: String = self.pending.iter().collect();

            if let Some(key) = lookup(&buffered) {
                self.pending.clear();
                return Ok(key);
            }

            if self.pending.len() >= MAX_PENDING_RUNES || !is_table_prefix(&buffered) {
                self.flush_pending();
            }
        }
    }
}

fn lookup(sequence: &str) -> Option<Key> {
    ESCAPE_SEQUENCE_TABLE
        .iter()
        .find(|(it, _)| *it == sequence)
        .map(|(_, key)| *key)
}

fn is_table_prefix(sequence: &str) -> bool {
    ESCAPE_SEQUENCE_TABLE
        .iter()
        .any(|(it, _)| it.starts_with(sequence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decoder, ESCAPE};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn decode_all(bytes: &[u8]) -> Vec<Key> {
        let mut it = TableDecoder::new(Cursor::new(bytes.to_vec()));
        let mut acc = vec![];
        loop {
            match it.decode() {
                Ok(key) => acc.push(key),
                Err(DecodeError::StreamEnded) => return acc,
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_agrees_with_state_machine_on_every_table_entry() {
        for (sequence, key) in ESCAPE_SEQUENCE_TABLE {
            let input = format!("{sequence}ab");
            let expected = vec![*key, Key::Char('a'), Key::Char('b')];

            assert_eq!(decode_all(input.as_bytes()), expected, "{sequence:?}");

            let mut state_machine = Decoder::new(Cursor::new(input.into_bytes()));
            let from_state_machine: Vec<Key> =
                std::iter::from_fn(|| state_machine.decode().ok()).collect();
            assert_eq!(from_state_machine, expected, "{sequence:?}");
        }
    }

    #[test]
    fn test_plain_keys_then_arrow() {
        assert_eq!(
            decode_all(b"hi\x1b[A"),
            vec![Key::Char('h'), Key::Char('i'), Key::ArrowUp]
        );
    }

    #[test]
    fn test_unknown_sequence_flushes_as_literals() {
        assert_eq!(
            decode_all(b"\x1b[Xz"),
            vec![ESCAPE, Key::Char('['), Key::Char('X'), Key::Char('z')]
        );
    }

    #[test]
    fn test_lone_escape_then_key() {
        assert_eq!(decode_all(b"\x1bi"), vec![ESCAPE, Key::Char('i')]);
    }

    #[test]
    fn test_second_escape_restarts_sequence() {
        assert_eq!(decode_all(b"\x1b\x1b[B"), vec![ESCAPE, Key::ArrowDown]);
    }

    #[test]
    fn test_bound_of_four_runes() {
        // `ESC [ 5` is a prefix, `5 5` is not, so all four are flushed.
        assert_eq!(
            decode_all(b"\x1b[55"),
            vec![ESCAPE, Key::Char('['), Key::Char('5'), Key::Char('5')]
        );
    }

    #[test]
    fn test_pending_runes_flushed_at_end_of_stream() {
        assert_eq!(decode_all(b"\x1b["), vec![ESCAPE, Key::Char('[')]);
    }
}
