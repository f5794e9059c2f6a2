// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns the raw byte stream from a terminal in raw mode into logical [`Key`]s.
//!
//! Two interchangeable strategies implement [`KeyDecoder`]:
//! - [`Decoder`]: a state machine that needs no lookahead and reports malformed
//!   sequences as [`DecodeError::InvalidEscape`].
//! - [`TableDecoder`]: buffers up to [`MAX_PENDING_RUNES`] and matches against
//!   [`ESCAPE_SEQUENCE_TABLE`], flushing unmatched runes as literal keys.

// Attach.
mod decode_error;
mod decoder;
mod key;
mod rune_reader;
mod table_decoder;

// Re-export.
pub use decode_error::*;
pub use decoder::*;
pub use key::*;
pub use rune_reader::*;
pub use table_decoder::*;

/// Blocks until one full key is resolved or the stream ends.
pub trait KeyDecoder {
    /// # Errors
    ///
    /// - [`DecodeError::StreamEnded`] once the input is exhausted.
    /// - [`DecodeError::InvalidEscape`] for a malformed sequence (recoverable, call
    ///   again to keep decoding).
    /// - [`DecodeError::Io`] if reading fails.
    fn decode(&mut self) -> Result<Key, DecodeError>;
}

impl<D: KeyDecoder + ?Sized> KeyDecoder for Box<D> {
    fn decode(&mut self) -> Result<Key, DecodeError> { (**self).decode() }
}
