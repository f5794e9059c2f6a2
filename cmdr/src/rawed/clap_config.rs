// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, ValueEnum};
use rawed_tui::{DEFAULT_TAB_STOP, DecoderKind};
use std::path::PathBuf;

pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "rawed")]
#[command(about = "A small raw mode terminal text editor")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nProvide a file path to edit in rawed. Or no arguments to edit a new file.\nUSAGE:\n  rawed [\x1b[32mfile path\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(name = "file path")]
    pub file_path: Option<PathBuf>,

    #[arg(
        long,
        short = 't',
        default_value_t = DEFAULT_TAB_STOP,
        help = "Number of columns a tab advances to."
    )]
    pub tab_stop: usize,

    #[arg(
        long,
        value_enum,
        default_value_t = DecoderArg::State,
        help = "How escape sequences from the keyboard are decoded."
    )]
    pub decoder: DecoderArg,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file for debugging, `log.txt` unless `--log-file` is given."
    )]
    pub enable_logging: bool,

    #[arg(global = true, long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

/// Command line spelling of [`DecoderKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DecoderArg {
    /// Reads one rune at a time and follows the escape grammar.
    State,
    /// Looks buffered runes up in a table of known sequences.
    Table,
}

impl From<DecoderArg> for DecoderKind {
    fn from(it: DecoderArg) -> Self {
        match it {
            DecoderArg::State => DecoderKind::State,
            DecoderArg::Table => DecoderKind::Table,
        }
    }
}
