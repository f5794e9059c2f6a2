// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns `SIGWINCH` into [`KernelEvent::Resize`].
//!
//! The signal handler itself only wakes the [`Signals`] iterator, the size query and
//! the channel send happen on a dedicated thread. Closing the returned handle ends
//! the iteration and the thread.

use super::{KernelEvent, KernelEventSender};
use crate::get_size;
use signal_hook::{consts::SIGWINCH, iterator::{Handle, Signals}};
use tracing::Dispatch;

pub const RESIZE_THREAD_NAME: &str = "rawed-resize";

/// # Errors
///
/// Returns an error if the signal can't be registered or the thread can't be spawned.
pub fn spawn_resize_watcher_thread(
    sender: KernelEventSender,
    dispatch: Dispatch,
) -> std::io::Result<Handle> {
    let mut signals = Signals::new([SIGWINCH])?;
    let handle = signals.handle();

    std::thread::Builder::new()
        .name(RESIZE_THREAD_NAME.into())
        .spawn(move || {
            tracing::dispatcher::with_default(&dispatch, || {
                for _ in signals.forever() {
                    let size = match get_size() {
                        Ok(size) => size,
                        Err(err) => {
                            tracing::warn!(message = "resize: can't read size", error = %err);
                            continue;
                        }
                    };
                    tracing::debug!(message = "resize", size = ?size);
                    if sender.send(KernelEvent::Resize(size)).is_err() {
                        break;
                    }
                }
            });
        })?;

    Ok(handle)
}
