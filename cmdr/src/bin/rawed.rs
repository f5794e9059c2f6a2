// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use rawed_cmdr::{CLIArg, run_app, tracing_config};
use rawed_tui::{Diagnostics, setup_default_miette_global_report_handler};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

#[tokio::main]
async fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);

    let cli_arg = CLIArg::parse();

    let diagnostics = if cli_arg.global_options.enable_logging {
        Diagnostics::open(&tracing_config(&cli_arg))?
    } else {
        Diagnostics::disabled()
    };

    let result = {
        let _guard = diagnostics.enter();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
        let result = run_app(&cli_arg, &diagnostics).await;
        if let Err(report) = &result {
            tracing::error!(message = "Could not run rawed", error = ?report);
        }
        tracing::debug!(message = "Stop logging...");
        result
    };

    diagnostics.close();
    result.map(|_exit| ())
}
