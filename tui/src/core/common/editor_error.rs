// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::DecodeError;
use miette::Diagnostic;
use std::path::{Path, PathBuf};

pub type EditorResult<T> = Result<T, EditorError>;

/// Everything that can go wrong while editing.
///
/// All variants except [`EditorError::InvalidIndex`] are shown to the user as a
/// status message and editing continues. An invalid index means a policy or the
/// kernel addressed a row that does not exist, which is a bug, so the kernel loop
/// stops and the error is reported after the terminal is restored.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum EditorError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Decode(#[from] DecodeError),

    #[error("{}: {source}", path.display())]
    #[diagnostic(
        code(rawed_tui::editor::io),
        help("Check that the file exists and that you have permission to access it")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No file name")]
    #[diagnostic(
        code(rawed_tui::editor::no_filename),
        help("Open a file or save under a new name first")
    )]
    NoFilename,

    #[error("Row index {index} is out of range for a document of {len} rows")]
    #[diagnostic(
        code(rawed_tui::editor::invalid_index),
        help("This is a bug, please report it")
    )]
    InvalidIndex { index: usize, len: usize },

    #[error("{what} is not supported")]
    #[diagnostic(code(rawed_tui::editor::unsupported))]
    Unsupported { what: String },

    #[error("Terminal error: {message}")]
    #[diagnostic(code(rawed_tui::editor::terminal))]
    Terminal { message: String },
}

impl EditorError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        EditorError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn unsupported(what: impl Into<String>) -> Self {
        EditorError::Unsupported { what: what.into() }
    }

    /// Fatal errors end the kernel loop instead of becoming a status message.
    #[must_use]
    pub fn is_fatal(&self) -> bool { matches!(self, EditorError::InvalidIndex { .. }) }
}

impl From<miette::Report> for EditorError {
    fn from(report: miette::Report) -> Self {
        EditorError::Terminal {
            message: report.to_string(),
        }
    }
}
