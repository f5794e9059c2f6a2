// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BACKSPACE, CARRIAGE_RETURN, ENTER, ESCAPE, Key, ctrl};

/// What the answer to a prompt is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum PromptKind {
    OpenFile,
    Find,
    SaveAs,
    Shell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Editing,
    Submitted(String),
    Cancelled,
}

/// A one line question in the message bar. While it is open it gets every key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    label: String,
    input: String,
    kind: PromptKind,
}

impl Prompt {
    pub fn new(label: impl Into<String>, kind: PromptKind) -> Self {
        Self {
            label: label.into(),
            input: String::new(),
            kind,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PromptKind { self.kind }

    #[must_use]
    pub fn input(&self) -> &str { &self.input }

    /// Message bar content while the prompt is open.
    #[must_use]
    pub fn display(&self) -> String { format!("{}{}", self.label, self.input) }

    /// `Ctrl+q` cancels. So does [`ESCAPE`], when the decoder delivers a lone one.
    pub fn handle_key(&mut self, key: Key) -> PromptOutcome {
        match key {
            ENTER | CARRIAGE_RETURN => PromptOutcome::Submitted(std::mem::take(&mut self.input)),
            ESCAPE => PromptOutcome::Cancelled,
            it if it == ctrl(b'q') => PromptOutcome::Cancelled,
            BACKSPACE => {
                self.input.pop();
                PromptOutcome::Editing
            }
            Key::Char(ch) if key.is_printable() => {
                self.input.push(ch);
                PromptOutcome::Editing
            }
            _ => PromptOutcome::Editing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn type_in(prompt: &mut Prompt, text: &str) {
        for ch in text.chars() {
            assert_eq!(prompt.handle_key(Key::Char(ch)), PromptOutcome::Editing);
        }
    }

    #[test]
    fn test_edit_and_submit() {
        let mut prompt = Prompt::new("File name: ", PromptKind::OpenFile);
        type_in(&mut prompt, "mian.c");
        for _ in 0..5 {
            prompt.handle_key(BACKSPACE);
        }
        type_in(&mut prompt, "ain.c");
        prompt.handle_key(Key::ArrowLeft);
        assert_eq!(prompt.display(), "File name: main.c");
        assert_eq!(
            prompt.handle_key(CARRIAGE_RETURN),
            PromptOutcome::Submitted("main.c".to_string())
        );
    }

    #[test]
    fn test_cancel() {
        let mut prompt = Prompt::new("$ ", PromptKind::Shell);
        type_in(&mut prompt, "ls");
        assert_eq!(prompt.handle_key(ESCAPE), PromptOutcome::Cancelled);
        assert_eq!(prompt.handle_key(ctrl(b'q')), PromptOutcome::Cancelled);
    }

    #[test]
    fn test_control_keys_are_not_typed() {
        let mut prompt = Prompt::new("/", PromptKind::Find);
        prompt.handle_key(ctrl(b'a'));
        prompt.handle_key(Key::Char('\t'));
        assert_eq!(prompt.input(), "\t");
        assert_eq!(prompt.handle_key(BACKSPACE), PromptOutcome::Editing);
        assert_eq!(prompt.handle_key(BACKSPACE), PromptOutcome::Editing);
        assert_eq!(prompt.input(), "");
    }
}
