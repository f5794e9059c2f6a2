// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

pub const OPEN_FILE_LABEL: &str = "File name: ";
pub const FIND_LABEL: &str = "Find: ";
pub const SAVE_AS_LABEL: &str = "Save as: ";
pub const SHELL_LABEL: &str = "$ ";
pub const SHELL_COMMANDS: &str = "Shell commands";
pub const NOTHING_TO_UNDO: &str = "nothing to undo";
pub const NO_PREVIOUS_SEARCH: &str = "no previous search";
pub const COMMAND_MODE: &str = "-- COMMAND --";

#[must_use]
pub fn saved_file(path: Option<&Path>) -> String {
    match path {
        Some(path) => format!("saved file: {}", path.display()),
        None => "saved file".to_string(),
    }
}

#[must_use]
pub fn opened_file(path: &Path, created: bool) -> String {
    if created {
        format!("new file: {}", path.display())
    } else {
        format!("opened file: {}", path.display())
    }
}

#[must_use]
pub fn goodbye_msg() -> String {
    match std::env::var("USER") {
        Ok(username) => format!("Goodbye, {username}. Thanks for using rawed!"),
        Err(_) => "Thanks for using rawed!".to_owned(),
    }
}
