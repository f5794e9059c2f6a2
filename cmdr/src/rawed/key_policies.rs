// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Key bindings, expressed as a chain of [`KeyPolicy`] values.
//!
//! The chain is `[CommandPolicy, InsertPolicy, BasicPolicy]`. The first two only act in
//! their own [`EditorMode`] and pass everything else down, so the basic bindings
//! (arrows, `Ctrl` shortcuts, editing) work in both modes unless a mode claims the key.

use super::ui_str;
use rawed_tui::{BACKSPACE, BoxedKeyPolicy, CARRIAGE_RETURN, Change, Document, ENTER, ESCAPE,
                EditorError, EditorMode, EditorResult, EditorState, Key, KeyOutcome,
                KeyPolicy, OpenOutcome, PromptKind, SyntaxDefinition, ctrl};
use std::path::Path;

pub const DEBUG_KEY_POLICIES: bool = false;

const CTRL_Q: Key = ctrl(b'q');
const CTRL_S: Key = ctrl(b's');
const CTRL_U: Key = ctrl(b'u');
const CTRL_D: Key = ctrl(b'd');
const CTRL_Z: Key = ctrl(b'z');
const CTRL_F: Key = ctrl(b'f');
const CTRL_O: Key = ctrl(b'o');

/// The chain the `rawed` binary runs with.
#[must_use]
pub fn default_policies(syntaxes: Vec<SyntaxDefinition>) -> Vec<BoxedKeyPolicy> {
    vec![
        Box::new(CommandPolicy::new(syntaxes)),
        Box::new(InsertPolicy),
        Box::new(BasicPolicy),
    ]
}

/// Bindings shared by both modes.
#[derive(Debug, Default)]
pub struct BasicPolicy;

impl KeyPolicy for BasicPolicy {
    fn name(&self) -> &'static str { "basic" }

    fn handle_key(&mut self, state: &mut EditorState, key: Key) -> EditorResult<KeyOutcome> {
        let doc = &state.doc;
        let viewport = &mut state.viewport;
        match key {
            Key::ArrowUp => viewport.move_rows(doc, -1),
            Key::ArrowDown => viewport.move_rows(doc, 1),
            Key::ArrowLeft => viewport.move_cols(doc, -1),
            Key::ArrowRight => viewport.move_cols(doc, 1),
            Key::Home => viewport.set_cursor_col(doc, 0),
            Key::End => viewport.set_cursor_col(doc, usize::MAX),
            Key::PageUp => viewport.page_up(doc),
            Key::PageDown => viewport.page_down(doc),
            CTRL_U => viewport.half_page_up(doc),
            CTRL_D => viewport.half_page_down(doc),
            CTRL_Q => return Ok(KeyOutcome::Quit),
            CTRL_S => save(state)?,
            CTRL_Z => undo(state)?,
            CTRL_F => state.open_prompt(ui_str::FIND_LABEL, PromptKind::Find),
            Key::Delete => delete_under_cursor(state)?,
            BACKSPACE => delete_before_cursor(state)?,
            Key::Char(ch) if key.is_printable() => insert_char(state, ch)?,
            _ => return Ok(KeyOutcome::NotHandled),
        }
        Ok(KeyOutcome::Handled)
    }

    fn on_prompt_submit(
        &mut self,
        state: &mut EditorState,
        kind: PromptKind,
        input: &str,
    ) -> EditorResult<KeyOutcome> {
        match kind {
            PromptKind::Find => {
                if !input.is_empty() {
                    state.search(input, true);
                }
            }
            PromptKind::SaveAs => {
                if input.is_empty() {
                    return Err(EditorError::NoFilename);
                }
                state.doc.save_to(input)?;
                state.set_status(ui_str::saved_file(state.doc.filename()));
            }
            PromptKind::OpenFile | PromptKind::Shell => return Ok(KeyOutcome::NotHandled),
        }
        Ok(KeyOutcome::Handled)
    }
}

/// Line editing that only makes sense while typing text.
#[derive(Debug, Default)]
pub struct InsertPolicy;

impl KeyPolicy for InsertPolicy {
    fn name(&self) -> &'static str { "insert" }

    fn handle_key(&mut self, state: &mut EditorState, key: Key) -> EditorResult<KeyOutcome> {
        if state.mode != EditorMode::Insert {
            return Ok(KeyOutcome::NotHandled);
        }

        let cursor = state.viewport.cursor();
        match key {
            ESCAPE | CTRL_O => {
                state.mode = EditorMode::Command;
                state.set_status(ui_str::COMMAND_MODE);
            }
            ENTER | CARRIAGE_RETURN => {
                let change = state.doc.split_row(cursor.row, cursor.char_index)?;
                state.record(change);
                state.viewport.set_cursor(&state.doc, cursor.row + 1, 0);
            }
            BACKSPACE if cursor.char_index == 0 && cursor.row > 0 => {
                let prev_len = state.doc.get_row(cursor.row - 1)?.len();
                if let Some(change) = state.doc.join_with_previous(cursor.row)? {
                    state.record(change);
                    state.viewport.set_cursor(&state.doc, cursor.row - 1, prev_len);
                }
            }
            _ => return Ok(KeyOutcome::NotHandled),
        }
        Ok(KeyOutcome::Handled)
    }
}

/// Single key commands. Holds the file types so the open file prompt can pick a
/// syntax for the new document.
#[derive(Debug)]
pub struct CommandPolicy {
    syntaxes: Vec<SyntaxDefinition>,
}

impl CommandPolicy {
    #[must_use]
    pub fn new(syntaxes: Vec<SyntaxDefinition>) -> Self { Self { syntaxes } }

    fn open_file(&self, state: &mut EditorState, path: &Path) -> EditorResult<()> {
        let mut doc = Document::new(state.doc.config());
        let outcome = doc.open_file(path, &self.syntaxes)?;
        state.doc = doc;
        state.history.clear();
        state.clear_search();
        state.viewport.set_cursor(&state.doc, 0, 0);
        state.set_status(ui_str::opened_file(path, outcome == OpenOutcome::Created));
        DEBUG_KEY_POLICIES.then(|| {
            tracing::debug!(message = "command: open file", path = %path.display(), ?outcome);
        });
        Ok(())
    }
}

impl KeyPolicy for CommandPolicy {
    fn name(&self) -> &'static str { "command" }

    fn handle_key(&mut self, state: &mut EditorState, key: Key) -> EditorResult<KeyOutcome> {
        if state.mode != EditorMode::Command {
            return Ok(KeyOutcome::NotHandled);
        }
        let Key::Char(ch) = key else {
            return Ok(KeyOutcome::NotHandled);
        };
        if !key.is_printable() {
            return Ok(KeyOutcome::NotHandled);
        }

        DEBUG_KEY_POLICIES.then(|| {
            tracing::debug!(message = "command: key", %key);
        });

        let last_row = state.doc.num_rows() - 1;
        let doc = &state.doc;
        let viewport = &mut state.viewport;
        match ch {
            'i' => {
                state.mode = EditorMode::Insert;
                state.clear_status();
            }
            'h' => viewport.move_cols(doc, -1),
            'l' => viewport.move_cols(doc, 1),
            'j' => viewport.move_rows(doc, 1),
            'k' => viewport.move_rows(doc, -1),
            'J' | 'G' => viewport.set_cursor_row(doc, last_row),
            'K' => viewport.set_cursor_row(doc, 0),
            'H' | '0' => viewport.set_cursor_col(doc, 0),
            '$' => viewport.set_cursor_col(doc, usize::MAX),
            'C' => clear_row(state)?,
            'x' => delete_under_cursor(state)?,
            'u' => undo(state)?,
            'e' => state.open_prompt(ui_str::OPEN_FILE_LABEL, PromptKind::OpenFile),
            '/' => state.open_prompt(ui_str::FIND_LABEL, PromptKind::Find),
            's' => state.open_prompt(ui_str::SHELL_LABEL, PromptKind::Shell),
            'n' | 'N' => {
                if state.last_query().is_none() {
                    state.set_status(ui_str::NO_PREVIOUS_SEARCH);
                } else {
                    state.search_again(ch == 'n');
                }
            }
            // Everything else is swallowed so it doesn't reach the insert binding.
            _ => {}
        }
        Ok(KeyOutcome::Handled)
    }

    fn on_prompt_submit(
        &mut self,
        state: &mut EditorState,
        kind: PromptKind,
        input: &str,
    ) -> EditorResult<KeyOutcome> {
        match kind {
            PromptKind::OpenFile => {
                if input.is_empty() {
                    return Err(EditorError::NoFilename);
                }
                self.open_file(state, Path::new(input))?;
                Ok(KeyOutcome::Handled)
            }
            PromptKind::Shell => Err(EditorError::unsupported(ui_str::SHELL_COMMANDS)),
            PromptKind::Find | PromptKind::SaveAs => Ok(KeyOutcome::NotHandled),
        }
    }
}

fn insert_char(state: &mut EditorState, ch: char) -> EditorResult<()> {
    let cursor = state.viewport.cursor();
    let change = state.doc.insert_char(cursor.row, cursor.char_index, ch)?;
    state.record(change);
    state.viewport.set_cursor_col(&state.doc, cursor.char_index + 1);
    Ok(())
}

fn delete_under_cursor(state: &mut EditorState) -> EditorResult<()> {
    let cursor = state.viewport.cursor();
    if let Some(change) = state.doc.delete_char(cursor.row, cursor.char_index)? {
        state.record(change);
    }
    Ok(())
}

/// At column 0 there is nothing before the cursor on this row. Joining rows is the
/// insert policy's job.
fn delete_before_cursor(state: &mut EditorState) -> EditorResult<()> {
    let cursor = state.viewport.cursor();
    if cursor.char_index == 0 {
        return Ok(());
    }
    if let Some(change) = state.doc.delete_char(cursor.row, cursor.char_index - 1)? {
        state.record(change);
        state.viewport.set_cursor_col(&state.doc, cursor.char_index - 1);
    }
    Ok(())
}

fn clear_row(state: &mut EditorState) -> EditorResult<()> {
    let row = state.viewport.cursor().row;
    let change = Change::edit_row(&state.doc, row, Vec::new())?;
    change.apply(&mut state.doc)?;
    state.record(change);
    Ok(())
}

fn undo(state: &mut EditorState) -> EditorResult<()> {
    if !state.undo()? {
        state.set_status(ui_str::NOTHING_TO_UNDO);
    }
    Ok(())
}

/// Without a file name the save turns into a "save as" prompt.
fn save(state: &mut EditorState) -> EditorResult<()> {
    match state.doc.save() {
        Ok(_) => {
            state.set_status(ui_str::saved_file(state.doc.filename()));
            Ok(())
        }
        Err(EditorError::NoFilename) => {
            state.open_prompt(ui_str::SAVE_AS_LABEL, PromptKind::SaveAs);
            Ok(())
        }
        Err(err) => Err(err),
    }
}
