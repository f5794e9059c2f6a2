// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The row store.
//!
//! Every mutation goes through [`Document::replace_rows`], which splices rows and then
//! re-highlights. Re-highlighting starts at the first touched row and keeps going for as
//! long as a row's recorded input continuation no longer matches the continuation of
//! the row above it. That is how opening or closing a multi-line comment repaints
//! every row that depends on it, and stops as soon as the state stabilizes.

use super::{EditorConfig, Row, RowDamage};
use crate::{EditorError, EditorResult, SyntaxDefinition, SyntaxSelector, select_for_path};
use std::{
    io::ErrorKind,
    ops::Range,
    path::{Path, PathBuf},
};

pub const DEBUG_DOCUMENT: bool = false;

/// How [`Document::open_file`] went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The file did not exist. The buffer is one empty row and counts as modified.
    Created,
    Loaded,
}

/// An ordered sequence of rows that is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    rows: Vec<Row>,
    filename: Option<PathBuf>,
    modified: bool,
    syntax: Option<SyntaxDefinition>,
    config: EditorConfig,
    damage: RowDamage,
}

impl Default for Document {
    fn default() -> Self { Self::new(EditorConfig::default()) }
}

impl Document {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        let mut it = Self {
            rows: vec![Row::default()],
            filename: None,
            modified: false,
            syntax: None,
            config,
            damage: RowDamage::All,
        };
        it.refresh_all();
        it
    }

    #[must_use]
    pub fn with_syntax(mut self, syntax: Option<SyntaxDefinition>) -> Self {
        self.set_syntax(syntax);
        self
    }

    /// Swap the syntax and re-highlight everything.
    pub fn set_syntax(&mut self, syntax: Option<SyntaxDefinition>) {
        self.syntax = syntax;
        self.refresh_all();
    }

    #[must_use]
    pub fn syntax(&self) -> Option<&SyntaxDefinition> { self.syntax.as_ref() }

    #[must_use]
    pub fn filetype(&self) -> Option<&'static str> { self.syntax.as_ref().map(|it| it.filetype) }

    #[must_use]
    pub fn config(&self) -> EditorConfig { self.config }

    #[must_use]
    pub fn tab_stop(&self) -> usize { self.config.tab_stop() }

    #[must_use]
    pub fn filename(&self) -> Option<&Path> { self.filename.as_deref() }

    pub fn set_filename(&mut self, filename: impl Into<PathBuf>) {
        self.filename = Some(filename.into());
    }

    #[must_use]
    pub fn is_modified(&self) -> bool { self.modified }

    #[must_use]
    pub fn num_rows(&self) -> usize { self.rows.len() }

    /// Rows to redraw since the last call.
    pub fn take_damage(&mut self) -> RowDamage { std::mem::take(&mut self.damage) }

    #[must_use]
    pub fn rows(&self) -> &[Row] { &self.rows }

    /// Replace all rows. No lines means one empty row. The result is unmodified.
    pub fn open_from_lines<S: AsRef<str>>(&mut self, lines: impl IntoIterator<Item = S>) {
        self.rows = lines
            .into_iter()
            .map(|line| Row::new(line.as_ref().chars().collect()))
            .collect();
        if self.rows.is_empty() {
            self.rows.push(Row::default());
        }
        self.modified = false;
        self.refresh_all();
    }

    /// Load `path`, picking the syntax from its extension. A missing file is not an
    /// error: the buffer starts empty and nothing touches the disk until it is saved.
    pub fn open_file(
        &mut self,
        path: impl AsRef<Path>,
        selector: &(impl SyntaxSelector + ?Sized),
    ) -> EditorResult<OpenOutcome> {
        let path = path.as_ref();
        let outcome = match std::fs::read_to_string(path) {
            Ok(content) => {
                self.open_from_lines(content.lines());
                OpenOutcome::Loaded
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                self.open_from_lines(std::iter::empty::<&str>());
                self.modified = true;
                OpenOutcome::Created
            }
            Err(err) => return Err(EditorError::io(path, err)),
        };

        self.filename = Some(path.to_path_buf());
        self.set_syntax(select_for_path(selector, path));

        DEBUG_DOCUMENT.then(|| {
            tracing::debug!(
                message = "open_file",
                path = %path.display(),
                outcome = ?outcome,
                rows = self.rows.len()
            );
        });

        Ok(outcome)
    }

    pub fn get_row(&self, index: usize) -> EditorResult<&Row> {
        self.rows.get(index).ok_or(EditorError::InvalidIndex {
            index,
            len: self.rows.len(),
        })
    }

    /// Replace the content of one row. Returns the rows that were re-highlighted.
    pub fn set_row(&mut self, index: usize, chars: Vec<char>) -> EditorResult<Range<usize>> {
        self.check_index(index)?;
        self.replace_rows(index, 1, vec![chars])
    }

    /// Insert before `index`. `index == num_rows()` appends.
    pub fn insert_row(&mut self, index: usize, chars: Vec<char>) -> EditorResult<Range<usize>> {
        if index > self.rows.len() {
            return Err(self.invalid_index(index));
        }
        self.replace_rows(index, 0, vec![chars])
    }

    /// Delete `from..=to`. Deleting every row leaves one empty row behind.
    pub fn delete_rows(&mut self, from: usize, to: usize) -> EditorResult<Range<usize>> {
        self.check_index(to)?;
        if from > to {
            return Err(self.invalid_index(from));
        }
        self.replace_rows(from, to - from + 1, vec![])
    }

    /// Remove `remove` rows at `at` and put `insert` in their place.
    pub fn replace_rows(
        &mut self,
        at: usize,
        remove: usize,
        insert: Vec<Vec<char>>,
    ) -> EditorResult<Range<usize>> {
        let end = at.checked_add(remove).unwrap_or(usize::MAX);
        if at > self.rows.len() || end > self.rows.len() {
            return Err(self.invalid_index(end.max(at)));
        }

        let len_before = self.rows.len();
        let forced = insert.len();
        self.rows.splice(at..end, insert.into_iter().map(Row::new));
        let forced = if self.rows.is_empty() {
            self.rows.push(Row::default());
            1
        } else {
            forced
        };
        self.modified = true;

        let refreshed = self.refresh_from(at.min(self.rows.len() - 1), forced);
        if self.rows.len() == len_before {
            self.damage.add(refreshed.clone());
        } else {
            self.damage.add_all();
        }
        Ok(refreshed)
    }

    pub fn save(&mut self) -> EditorResult<usize> {
        let Some(path) = self.filename.clone() else {
            return Err(EditorError::NoFilename);
        };
        self.save_to(path)
    }

    /// Write rows joined by `\n` and adopt `path` as the file name. Returns the number
    /// of bytes written.
    pub fn save_to(&mut self, path: impl AsRef<Path>) -> EditorResult<usize> {
        let path = path.as_ref();
        let content = self.to_text();
        std::fs::write(path, &content).map_err(|err| EditorError::io(path, err))?;
        self.filename = Some(path.to_path_buf());
        self.modified = false;
        tracing::debug!(message = "saved", path = %path.display(), bytes = content.len());
        Ok(content.len())
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        self.rows
            .iter()
            .map(Row::as_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Content of every row, used to snapshot a document in tests and for undo.
    #[must_use]
    pub fn lines(&self) -> Vec<String> { self.rows.iter().map(Row::as_string).collect() }

    pub(crate) fn row_chars(&self, index: usize) -> EditorResult<Vec<char>> {
        Ok(self.get_row(index)?.chars().to_vec())
    }

    fn check_index(&self, index: usize) -> EditorResult<()> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(self.invalid_index(index))
        }
    }

    fn invalid_index(&self, index: usize) -> EditorError {
        EditorError::InvalidIndex {
            index,
            len: self.rows.len(),
        }
    }

    fn refresh_all(&mut self) {
        let len = self.rows.len();
        self.refresh_from(0, len);
        self.damage.add_all();
    }

    /// Re-highlight `forced` rows starting at `first`, then carry on while the
    /// continuation a row was highlighted with is stale.
    fn refresh_from(&mut self, first: usize, forced: usize) -> Range<usize> {
        let tab_stop = self.config.tab_stop();
        let mut y = first;
        while y < self.rows.len() {
            let prev_continuation = y > 0 && self.rows[y - 1].continuation();
            let is_forced = y < first + forced;
            if !is_forced && self.rows[y].highlighted_after() == prev_continuation {
                break;
            }
            self.rows[y].update(tab_stop, prev_continuation, self.syntax.as_ref());
            y += 1;
        }
        first..y
    }
}
