// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DecoderKind, EditorState, Kernel, KernelExit, PolicyChain, kernel_event_channel,
            spawn_stdin_reader_thread};
use crate::{AlternateScreenGuard, ColorScheme, Diagnostics, OutputDevice, RawModeGuard,
            Renderer, get_size_or_default, install_terminal_restoring_panic_hook};
use miette::IntoDiagnostic as _;
use tracing::instrument::WithSubscriber as _;

/// Options for [`run_kernel`] that are not part of the editor state.
#[derive(Debug, Clone, Default)]
pub struct KernelOptions {
    pub decoder_kind: DecoderKind,
    pub color_scheme: ColorScheme,
}

/// Take over the terminal and run the kernel loop until it stops.
///
/// Raw mode and the alternate screen are held by guards, so they are released on
/// every way out of this function. A panic is covered by the panic hook, which
/// restores the terminal before the report is printed.
///
/// # Errors
///
/// Returns an error if the terminal can't be set up or the loop ends with a fatal
/// error. The terminal is already restored when the error is returned.
pub async fn run_kernel(
    mut state: EditorState,
    policies: PolicyChain,
    options: KernelOptions,
    diagnostics: &Diagnostics,
) -> miette::Result<(KernelExit, EditorState)> {
    install_terminal_restoring_panic_hook();

    let output_device = OutputDevice::new_stdout();
    let _raw_mode = RawModeGuard::new().into_diagnostic()?;
    let _alternate_screen = AlternateScreenGuard::new(output_device.clone()).into_diagnostic()?;

    state.viewport.resize(get_size_or_default());

    let (sender, mut receiver) = kernel_event_channel();
    spawn_stdin_reader_thread(options.decoder_kind, sender.clone(), diagnostics.dispatch())
        .into_diagnostic()?;
    #[cfg(unix)]
    let resize_handle =
        super::spawn_resize_watcher_thread(sender, diagnostics.dispatch()).into_diagnostic()?;
    #[cfg(not(unix))]
    drop(sender);

    let mut kernel = Kernel::new(
        state,
        policies,
        Renderer::new(output_device, options.color_scheme),
    );
    let result = kernel
        .run(&mut receiver)
        .with_subscriber(diagnostics.dispatch())
        .await;

    #[cfg(unix)]
    resize_handle.close();

    let exit = result?;
    Ok((exit, kernel.into_state()))
}
