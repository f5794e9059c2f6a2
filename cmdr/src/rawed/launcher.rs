// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CLIArg, builtin_syntaxes, default_policies, ui_str};
use rawed_tui::{ColorScheme, Diagnostics, Document, EditorConfig, EditorState, KernelExit,
                KernelOptions, PolicyChain, SyntaxDefinition, TracingConfig, Viewport,
                get_size_or_default, run_kernel};
use tracing_core::LevelFilter;

pub const HELP_MESSAGE: &str = "HELP: Ctrl-s save | Ctrl-q quit | Ctrl-f find | Ctrl-o command mode";

/// Where logs go, from the command line flags.
#[must_use]
pub fn tracing_config(cli_arg: &CLIArg) -> TracingConfig {
    if cli_arg.global_options.enable_logging {
        TracingConfig::new_file(&cli_arg.global_options.log_file, LevelFilter::DEBUG)
    } else {
        TracingConfig::disabled()
    }
}

/// Load the file named on the command line, if any.
///
/// # Errors
///
/// Returns an error if the file exists but can't be read.
pub fn new_state(cli_arg: &CLIArg, syntaxes: &[SyntaxDefinition]) -> miette::Result<EditorState> {
    let config = EditorConfig::default().with_tab_stop(cli_arg.tab_stop);
    let mut doc = Document::new(config);
    if let Some(path) = &cli_arg.file_path {
        let outcome = doc.open_file(path, syntaxes)?;
        tracing::debug!(message = "launcher: opened", path = %path.display(), ?outcome);
    }

    let mut state = EditorState::new(doc, Viewport::new(get_size_or_default()));
    state.set_status(HELP_MESSAGE);
    Ok(state)
}

/// Run the editor until the user quits or stdin closes.
///
/// # Errors
///
/// Returns an error if the file can't be loaded, the terminal can't be set up, or the
/// kernel stops on a fatal error.
pub async fn run_app(cli_arg: &CLIArg, diagnostics: &Diagnostics) -> miette::Result<KernelExit> {
    let syntaxes = builtin_syntaxes();
    let state = new_state(cli_arg, &syntaxes)?;
    let policies = PolicyChain::new(default_policies(syntaxes));
    tracing::debug!(message = "launcher: policies", names = ?policies.names());

    let options = KernelOptions {
        decoder_kind: cli_arg.decoder.into(),
        color_scheme: ColorScheme::default(),
    };

    let (exit, state) = run_kernel(state, policies, options, diagnostics).await?;
    tracing::info!(
        message = "launcher: exit",
        ?exit,
        modified = state.doc.is_modified()
    );
    println!("{}", ui_str::goodbye_msg());
    Ok(exit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use rawed_tui::WriterConfig;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> CLIArg {
        CLIArg::try_parse_from(std::iter::once("rawed").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_tracing_config_follows_flags() {
        let off = tracing_config(&parse(&[]));
        assert_eq!(off.get_writer_config(), WriterConfig::None);
        assert_eq!(off.get_level_filter(), LevelFilter::OFF);

        let on = tracing_config(&parse(&["-l", "--log-file", "rawed.log"]));
        assert_eq!(
            on.get_writer_config(),
            WriterConfig::File(PathBuf::from("rawed.log"))
        );
        assert_eq!(on.get_level_filter(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_new_state_without_file() {
        let state = new_state(&parse(&["-t", "4"]), &builtin_syntaxes()).unwrap();
        assert_eq!(state.doc.lines(), vec![""]);
        assert_eq!(state.doc.tab_stop(), 4);
        assert_eq!(state.doc.filename(), None);
        assert_eq!(state.status(), HELP_MESSAGE);
    }

    #[test]
    fn test_new_state_loads_file_and_syntax() {
        let path = std::env::temp_dir().join(format!("rawed-launcher-{}.go", std::process::id()));
        std::fs::write(&path, "package main\n\nfunc main() {}\n").unwrap();

        let path_arg = path.to_string_lossy().into_owned();
        let arg = parse(&[path_arg.as_str()]);
        let state = new_state(&arg, &builtin_syntaxes()).unwrap();
        assert_eq!(state.doc.lines(), vec!["package main", "", "func main() {}"]);
        assert_eq!(state.doc.filetype(), Some("go"));
        assert!(!state.doc.is_modified());

        std::fs::remove_file(&path).unwrap();
    }
}
