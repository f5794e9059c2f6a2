// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Dedicated input reader thread.
//!
//! Stdin is read with blocking reads on a plain OS thread and every decoded key is
//! sent to the kernel loop over an unbounded [`tokio::sync::mpsc`] channel. The kernel
//! only ever awaits the channel, which is cancel safe, and never touches stdin.
//!
//! # Lifecycle
//!
//! | Exit mechanism     | How the thread exits                                   |
//! | ------------------ | ------------------------------------------------------ |
//! | stdin EOF          | decoder reports [`DecodeError::StreamEnded`], thread sends [`KernelEvent::InputClosed`] and returns |
//! | stdin read error   | thread sends the error, then `InputClosed`, and returns |
//! | receiver dropped   | next send fails, thread returns                        |
//! | process exit       | the OS reclaims the thread, it is blocked in `read()`  |
//!
//! Nothing joins this thread. It owns no resources besides the stdin lock.

use super::{KernelEvent, KernelEventSender};
use crate::{DecodeError, Decoder, EditorError, KeyDecoder, TableDecoder};
use std::{io::BufRead, thread::JoinHandle};
use tracing::Dispatch;

pub const DEBUG_RAWED_READER: bool = false;

pub const READER_THREAD_NAME: &str = "rawed-reader";

/// Which decoder turns stdin into keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display, strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum DecoderKind {
    /// One rune at a time state machine.
    #[default]
    State,
    /// Buffers up to four runes and looks them up in the escape table.
    Table,
}

/// Spawn the reader over stdin.
///
/// # Errors
///
/// Returns an error if the thread can't be spawned.
pub fn spawn_stdin_reader_thread(
    kind: DecoderKind,
    sender: KernelEventSender,
    dispatch: Dispatch,
) -> std::io::Result<JoinHandle<()>> {
    match kind {
        DecoderKind::State => spawn_input_reader_thread(
            || Decoder::new(std::io::stdin().lock()),
            sender,
            dispatch,
        ),
        DecoderKind::Table => spawn_input_reader_thread(
            || TableDecoder::new(std::io::stdin().lock()),
            sender,
            dispatch,
        ),
    }
}

/// Spawn the reader over whatever decoder `make_decoder` builds. The decoder is built
/// on the new thread, so it may hold a non `Send` lock.
///
/// # Errors
///
/// Returns an error if the thread can't be spawned.
pub fn spawn_input_reader_thread<D, F>(
    make_decoder: F,
    sender: KernelEventSender,
    dispatch: Dispatch,
) -> std::io::Result<JoinHandle<()>>
where
    D: KeyDecoder,
    F: FnOnce() -> D + Send + 'static,
{
    std::thread::Builder::new()
        .name(READER_THREAD_NAME.into())
        .spawn(move || {
            tracing::dispatcher::with_default(&dispatch, || {
                input_reader_loop(make_decoder(), &sender);
            });
        })
}

fn input_reader_loop(mut decoder: impl KeyDecoder, sender: &KernelEventSender) {
    loop {
        let event = match decoder.decode() {
            Ok(key) => {
                DEBUG_RAWED_READER.then(|| {
                    tracing::debug!(message = "input-reader-thread: key", %key);
                });
                KernelEvent::Key(key)
            }
            Err(DecodeError::StreamEnded) => {
                tracing::debug!(message = "input-reader-thread: end of input");
                drop(sender.send(KernelEvent::InputClosed));
                return;
            }
            Err(err @ DecodeError::Io(_)) => {
                tracing::error!(message = "input-reader-thread: read failed", error = %err);
                drop(sender.send(KernelEvent::Error(EditorError::from(err))));
                drop(sender.send(KernelEvent::InputClosed));
                return;
            }
            Err(err) => {
                tracing::warn!(message = "input-reader-thread: bad input", error = %err);
                KernelEvent::Error(EditorError::from(err))
            }
        };

        if sender.send(event).is_err() {
            DEBUG_RAWED_READER.then(|| {
                tracing::debug!(message = "input-reader-thread: receiver dropped, exiting");
            });
            return;
        }
    }
}

/// Lets tests and other front ends drive a reader from any byte source.
#[must_use]
pub fn decoder_for<R: BufRead + 'static>(kind: DecoderKind, reader: R) -> Box<dyn KeyDecoder> {
    match kind {
        DecoderKind::State => Box::new(Decoder::new(reader)),
        DecoderKind::Table => Box::new(TableDecoder::new(reader)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel_event_channel;
    use pretty_assertions::assert_eq;
    use std::{io::Cursor, str::FromStr};
    use test_case::test_case;

    fn collect(kind: DecoderKind, bytes: &'static [u8]) -> Vec<String> {
        let (sender, mut receiver) = kernel_event_channel();
        let handle = spawn_input_reader_thread(
            move || decoder_for(kind, Cursor::new(bytes)),
            sender,
            Dispatch::none(),
        )
        .unwrap();
        handle.join().unwrap();

        let mut events = vec![];
        while let Ok(event) = receiver.try_recv() {
            events.push(match event {
                KernelEvent::Key(key) => key.to_string(),
                KernelEvent::Error(err) => format!("error: {err}"),
                KernelEvent::InputClosed => "closed".to_string(),
                KernelEvent::Resize(size) => format!("{size:?}"),
            });
        }
        events
    }

    #[test_case(DecoderKind::State)]
    #[test_case(DecoderKind::Table)]
    fn test_keys_then_closed(kind: DecoderKind) {
        assert_eq!(
            collect(kind, b"hi\x1b[A"),
            vec!["h", "i", "ArrowUp", "closed"]
        );
    }

    #[test]
    fn test_bad_escape_is_reported_and_reading_continues() {
        assert_eq!(
            collect(DecoderKind::State, b"\x1b[Xa"),
            vec![
                "error: Invalid escape sequence, unexpected 'X'",
                "a",
                "closed"
            ]
        );
    }

    #[test]
    fn test_thread_exits_when_receiver_is_dropped() {
        let (sender, receiver) = kernel_event_channel();
        drop(receiver);
        let handle = spawn_input_reader_thread(
            || decoder_for(DecoderKind::State, Cursor::new(b"abc".as_slice())),
            sender,
            Dispatch::none(),
        )
        .unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_decoder_kind_from_str() {
        assert_eq!(DecoderKind::from_str("table").unwrap(), DecoderKind::Table);
        assert_eq!(DecoderKind::from_str("state").unwrap(), DecoderKind::State);
        assert_eq!(DecoderKind::State.to_string(), "state");
        assert!(DecoderKind::from_str("nope").is_err());
    }
}
