// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EditorError, Key, Size};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// What the reader and resize threads tell the kernel loop. Events carry values only,
/// the threads never touch editor state.
#[derive(Debug)]
pub enum KernelEvent {
    Key(Key),
    Resize(Size),
    /// A recoverable problem on the input side, eg: a malformed escape sequence.
    Error(EditorError),
    /// The input stream ended.
    InputClosed,
}

pub type KernelEventSender = UnboundedSender<KernelEvent>;
pub type KernelEventReceiver = UnboundedReceiver<KernelEvent>;

/// Unbounded so that a burst of keys (eg: a paste) never blocks the reader.
#[must_use]
pub fn kernel_event_channel() -> (KernelEventSender, KernelEventReceiver) {
    unbounded_channel()
}
