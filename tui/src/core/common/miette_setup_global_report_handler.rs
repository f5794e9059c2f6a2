// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Global [miette](https://docs.rs/miette/latest/miette/index.html) report handler.
//!
//! The hook registered by [`miette::set_hook`] only runs when a report is actually
//! printed, eg: when `main() -> miette::Result<_>` returns an error. By then the
//! terminal has been restored to cooked mode, so the width can be measured right
//! before the report is laid out.

use crate::get_terminal_width;
use miette::MietteHandlerOpts;
use tracing::debug;

pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = {
            let it = get_terminal_width().as_usize();
            debug!(message = "miette::set_hook", terminal_width = it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
