// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Prompt, PromptKind};
use crate::{Change, Document, EditorResult, Frame, History, RowDamage, SearchMatch, Viewport};
use std::{borrow::Cow, ops::Range};

/// Which set of bindings the key policies apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum EditorMode {
    #[default]
    Insert,
    Command,
}

/// How much of the screen the next draw has to cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redraw {
    Frame,
    /// These document rows, then the status and message bars.
    Rows(Range<usize>),
}

/// What was on screen after the last draw, apart from row content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DrawnView {
    row_offset: usize,
    col_offset: usize,
    screen_rows: usize,
    screen_cols: usize,
    search_match: Option<SearchMatch>,
}

/// Everything the kernel loop owns and the key policies mutate.
#[derive(Debug)]
pub struct EditorState {
    pub doc: Document,
    pub viewport: Viewport,
    pub history: History,
    pub mode: EditorMode,
    status: String,
    prompt: Option<Prompt>,
    search_match: Option<SearchMatch>,
    last_query: Option<String>,
    last_drawn: Option<DrawnView>,
}

impl EditorState {
    #[must_use]
    pub fn new(doc: Document, viewport: Viewport) -> Self {
        Self {
            doc,
            viewport,
            history: History::default(),
            mode: EditorMode::default(),
            status: String::new(),
            prompt: None,
            search_match: None,
            last_query: None,
            last_drawn: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) { self.status = message.into(); }

    pub fn clear_status(&mut self) { self.status.clear(); }

    #[must_use]
    pub fn status(&self) -> &str { &self.status }

    pub fn open_prompt(&mut self, label: impl Into<String>, kind: PromptKind) {
        self.prompt = Some(Prompt::new(label, kind));
    }

    #[must_use]
    pub fn prompt(&self) -> Option<&Prompt> { self.prompt.as_ref() }

    pub fn prompt_mut(&mut self) -> Option<&mut Prompt> { self.prompt.as_mut() }

    pub fn close_prompt(&mut self) -> Option<Prompt> { self.prompt.take() }

    /// The prompt while one is open, otherwise the status message.
    #[must_use]
    pub fn message_bar_text(&self) -> Cow<'_, str> {
        match &self.prompt {
            Some(prompt) => Cow::Owned(prompt.display()),
            None => Cow::Borrowed(&self.status),
        }
    }

    #[must_use]
    pub fn search_match(&self) -> Option<SearchMatch> { self.search_match }

    #[must_use]
    pub fn last_query(&self) -> Option<&str> { self.last_query.as_deref() }

    /// Snapshot to draw from.
    #[must_use]
    pub fn frame<'a>(&'a self, message: &'a str) -> Frame<'a> {
        Frame {
            doc: &self.doc,
            viewport: &self.viewport,
            message,
            search_match: self.search_match,
        }
    }

    /// Decide what to draw and remember the view it is drawn for. A scroll, a resize or
    /// a moved search match needs a full frame, otherwise only the damaged rows.
    pub fn take_redraw(&mut self) -> Redraw {
        let view = DrawnView {
            row_offset: self.viewport.row_offset(),
            col_offset: self.viewport.col_offset(),
            screen_rows: self.viewport.screen_rows(),
            screen_cols: self.viewport.screen_cols(),
            search_match: self.search_match,
        };
        let damage = self.doc.take_damage();
        if self.last_drawn.replace(view) != Some(view) {
            return Redraw::Frame;
        }
        match damage {
            RowDamage::Clean => Redraw::Rows(0..0),
            RowDamage::Rows(rows) => Redraw::Rows(rows),
            RowDamage::All => Redraw::Frame,
        }
    }

    /// Keep an applied change for undo and make sure the cursor still points into the
    /// document.
    pub fn record(&mut self, change: Change) {
        self.history.push(change);
        self.search_match = None;
        self.viewport.clamp(&self.doc);
    }

    /// Undo the last change and put the cursor where it happened. False when there was
    /// nothing to undo.
    pub fn undo(&mut self) -> EditorResult<bool> {
        let Some(change) = self.history.undo(&mut self.doc)? else {
            return Ok(false);
        };
        self.search_match = None;
        self.viewport.set_cursor_row(&self.doc, change.at());
        self.viewport.clamp(&self.doc);
        Ok(true)
    }

    /// Search from the cursor and jump to the match. `forward` searches past the
    /// cursor, otherwise before it. Sets the status when nothing is found.
    pub fn search(&mut self, query: &str, forward: bool) -> Option<SearchMatch> {
        self.last_query = Some(query.to_string());
        let cursor = self.viewport.cursor();
        let found = if forward {
            self.doc.find(query, cursor.row, cursor.char_index + 1)
        } else {
            self.doc.find_back(query, cursor.row, cursor.char_index)
        };

        self.search_match = found;
        match found {
            Some(found) => {
                self.viewport.set_cursor(&self.doc, found.row, found.char_index);
                self.clear_status();
            }
            None => self.set_status(format!("not found: {query}")),
        }
        found
    }

    /// Repeat the last search.
    pub fn search_again(&mut self, forward: bool) -> Option<SearchMatch> {
        let query = self.last_query.clone()?;
        self.search(&query, forward)
    }

    pub fn clear_search(&mut self) { self.search_match = None; }
}
