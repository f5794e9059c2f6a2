// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{HighlightClass, SyntaxDefinition, char_display_width, highlight_row};

/// One line of the document.
///
/// `chars` is the content. `render` and `highlight` are derived from it (and from the
/// continuation flag of the row above) and are recomputed eagerly by
/// [`crate::Document`] on every change, so they are never stale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    chars: Vec<char>,
    render: Vec<char>,
    highlight: Vec<HighlightClass>,
    continuation: bool,
    /// Continuation flag of the row above at the time of the last update.
    highlighted_after: bool,
}

impl Row {
    #[must_use]
    pub fn chars(&self) -> &[char] { &self.chars }

    #[must_use]
    pub fn render(&self) -> &[char] { &self.render }

    #[must_use]
    pub fn render_string(&self) -> String { self.render.iter().collect() }

    /// Same length as [`Row::render`].
    #[must_use]
    pub fn highlight(&self) -> &[HighlightClass] { &self.highlight }

    /// A multi-line comment is still open at the end of this row.
    #[must_use]
    pub fn continuation(&self) -> bool { self.continuation }

    #[must_use]
    pub fn len(&self) -> usize { self.chars.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.chars.is_empty() }

    #[must_use]
    pub fn as_string(&self) -> String { self.chars.iter().collect() }

    pub(crate) fn new(chars: Vec<char>) -> Self {
        Self {
            chars,
            ..Default::default()
        }
    }

    pub(crate) fn set_chars(&mut self, chars: Vec<char>) { self.chars = chars; }

    pub(crate) fn into_chars(self) -> Vec<char> { self.chars }

    pub(crate) fn highlighted_after(&self) -> bool { self.highlighted_after }

    /// Rebuild `render` and `highlight` from `chars`.
    pub(crate) fn update(
        &mut self,
        tab_stop: usize,
        prev_continuation: bool,
        syntax: Option<&SyntaxDefinition>,
    ) {
        self.render = expand_tabs(&self.chars, tab_stop);
        let it = highlight_row(&self.render, prev_continuation, syntax);
        self.highlight = it.classes;
        self.continuation = it.continuation;
        self.highlighted_after = prev_continuation;
    }
}

/// A tab becomes at least one space, then spaces up to the next tab stop. Columns are
/// counted in display width, so wide chars shift later tab stops.
#[must_use]
pub fn expand_tabs(chars: &[char], tab_stop: usize) -> Vec<char> {
    let tab_stop = tab_stop.max(1);
    let mut render = Vec::with_capacity(chars.len());
    let mut col = 0;
    for &ch in chars {
        if ch == '\t' {
            render.push(' ');
            col += 1;
            while col % tab_stop != 0 {
                render.push(' ');
                col += 1;
            }
        } else {
            render.push(ch);
            col += char_display_width(ch);
        }
    }
    render
}
