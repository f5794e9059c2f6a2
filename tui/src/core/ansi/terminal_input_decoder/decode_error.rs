// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

/// Why [`KeyDecoder::decode`] did not produce a key.
///
/// After any of these the decoder is back in its ground state, so the next call
/// starts a fresh key.
///
/// [`KeyDecoder::decode`]: crate::KeyDecoder::decode
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum DecodeError {
    #[error("Invalid escape sequence, unexpected {found:?}")]
    #[diagnostic(
        code(rawed_tui::decoder::invalid_escape),
        help("The sequence was dropped, input decoding continues with the next key")
    )]
    InvalidEscape { found: char },

    #[error("Terminal input stream ended")]
    #[diagnostic(code(rawed_tui::decoder::stream_ended))]
    StreamEnded,

    #[error("Failed to read terminal input")]
    #[diagnostic(code(rawed_tui::decoder::io))]
    Io(#[source] std::io::Error),
}
