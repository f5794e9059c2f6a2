// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{cx_to_rx, rx_to_cx};
use crate::{Document, Size};

/// Rows taken by the status bar and the message bar.
pub const BAR_ROWS: usize = 2;

/// Cursor position. `render_col` is always `cx_to_rx` of `char_index` in `row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub char_index: usize,
    pub render_col: usize,
}

/// The visible window into a [`Document`] plus the cursor inside it.
///
/// Every operation that moves the cursor ends by scrolling just enough to keep the
/// cursor row in `row_offset..row_offset + screen_rows` and its render column in
/// `col_offset..col_offset + screen_cols`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    cursor: Cursor,
    /// Column vertical moves aim for. Only horizontal moves change it.
    desired_render_col: usize,
    row_offset: usize,
    col_offset: usize,
    screen_rows: usize,
    screen_cols: usize,
}

impl Viewport {
    /// `size` is the whole terminal, the bars are taken off the bottom.
    #[must_use]
    pub fn new(size: Size) -> Self {
        let mut it = Self {
            cursor: Cursor::default(),
            desired_render_col: 0,
            row_offset: 0,
            col_offset: 0,
            screen_rows: 1,
            screen_cols: 1,
        };
        it.set_screen_size(size);
        it
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor { self.cursor }

    #[must_use]
    pub fn row_offset(&self) -> usize { self.row_offset }

    #[must_use]
    pub fn col_offset(&self) -> usize { self.col_offset }

    /// Rows available for text.
    #[must_use]
    pub fn screen_rows(&self) -> usize { self.screen_rows }

    #[must_use]
    pub fn screen_cols(&self) -> usize { self.screen_cols }

    /// Cursor position relative to the top left of the text area.
    #[must_use]
    pub fn screen_cursor(&self) -> (usize, usize) {
        (
            self.cursor.row - self.row_offset,
            self.cursor.render_col - self.col_offset,
        )
    }

    #[must_use]
    pub fn is_row_visible(&self, row: usize) -> bool {
        row >= self.row_offset && row < self.row_offset + self.screen_rows
    }

    pub fn resize(&mut self, size: Size) {
        self.set_screen_size(size);
        self.reconcile();
    }

    fn set_screen_size(&mut self, size: Size) {
        self.screen_rows = size.row_height.as_usize().saturating_sub(BAR_ROWS).max(1);
        self.screen_cols = size.col_width.as_usize().max(1);
    }

    /// Move to row `y` (clamped), keeping the screen column of the last horizontal move.
    pub fn set_cursor_row(&mut self, doc: &Document, y: usize) {
        let row = y.min(doc.num_rows() - 1);
        let chars = doc.rows()[row].chars();
        let char_index = rx_to_cx(chars, doc.tab_stop(), self.desired_render_col);
        self.cursor = Cursor {
            row,
            char_index,
            render_col: cx_to_rx(chars, doc.tab_stop(), char_index),
        };
        self.reconcile();
    }

    /// Move to char index `x` (clamped to the row length) on the current row.
    pub fn set_cursor_col(&mut self, doc: &Document, x: usize) {
        let chars = doc.rows()[self.cursor.row].chars();
        let char_index = x.min(chars.len());
        let render_col = cx_to_rx(chars, doc.tab_stop(), char_index);
        self.cursor.char_index = char_index;
        self.cursor.render_col = render_col;
        self.desired_render_col = render_col;
        self.reconcile();
    }

    pub fn set_cursor(&mut self, doc: &Document, row: usize, char_index: usize) {
        self.cursor.row = row.min(doc.num_rows() - 1);
        self.set_cursor_col(doc, char_index);
    }

    pub fn move_rows(&mut self, doc: &Document, delta: isize) {
        self.set_cursor_row(doc, self.cursor.row.saturating_add_signed(delta));
    }

    pub fn move_cols(&mut self, doc: &Document, delta: isize) {
        self.set_cursor_col(doc, self.cursor.char_index.saturating_add_signed(delta));
    }

    pub fn page_up(&mut self, doc: &Document) {
        self.move_rows(doc, -to_isize(self.screen_rows));
    }

    pub fn page_down(&mut self, doc: &Document) {
        self.move_rows(doc, to_isize(self.screen_rows));
    }

    pub fn half_page_up(&mut self, doc: &Document) {
        self.move_rows(doc, -to_isize(self.screen_rows / 2));
    }

    pub fn half_page_down(&mut self, doc: &Document) {
        self.move_rows(doc, to_isize(self.screen_rows / 2));
    }

    /// Re-validate the cursor after the document changed underneath it. The column
    /// vertical moves aim for is left alone.
    pub fn clamp(&mut self, doc: &Document) {
        let row = self.cursor.row.min(doc.num_rows() - 1);
        let chars = doc.rows()[row].chars();
        let char_index = self.cursor.char_index.min(chars.len());
        self.cursor = Cursor {
            row,
            char_index,
            render_col: cx_to_rx(chars, doc.tab_stop(), char_index),
        };
        self.reconcile();
    }

    /// Minimal scroll that brings the cursor back into view.
    pub fn reconcile(&mut self) {
        let Cursor {
            row, render_col, ..
        } = self.cursor;

        if row < self.row_offset {
            self.row_offset = row;
        } else if row >= self.row_offset + self.screen_rows {
            self.row_offset = row + 1 - self.screen_rows;
        }

        if render_col < self.col_offset {
            self.col_offset = render_col;
        } else if render_col >= self.col_offset + self.screen_cols {
            self.col_offset = render_col + 1 - self.screen_cols;
        }
    }
}

fn to_isize(value: usize) -> isize { isize::try_from(value).unwrap_or(isize::MAX) }
