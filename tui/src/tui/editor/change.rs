// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::Document;
use crate::{EditorError, EditorResult};
use std::ops::Range;

/// A reversible splice: at row `at`, the rows in `before` were replaced by the rows in
/// `after`. [`Change::apply`] and [`Change::undo`] are exact inverses.
///
/// Constructors never describe a change that would leave the document without rows,
/// deleting everything is recorded as turning the rows into a single empty row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    at: usize,
    before: Vec<Vec<char>>,
    after: Vec<Vec<char>>,
}

impl Change {
    /// Replace the content of row `row`.
    pub fn edit_row(doc: &Document, row: usize, chars: Vec<char>) -> EditorResult<Self> {
        Self::splice(doc, row, 1, vec![chars])
    }

    /// Insert `rows` before row `at` (`at == num_rows()` appends).
    pub fn insert_rows(doc: &Document, at: usize, rows: Vec<Vec<char>>) -> EditorResult<Self> {
        Self::splice(doc, at, 0, rows)
    }

    /// Delete `from..=to`.
    pub fn delete_rows(doc: &Document, from: usize, to: usize) -> EditorResult<Self> {
        if from > to {
            return Err(EditorError::InvalidIndex {
                index: from,
                len: doc.num_rows(),
            });
        }
        Self::splice(doc, from, to - from + 1, vec![])
    }

    /// Replace `remove` rows at `at` with `after`, capturing what was there. Removing
    /// every row without a replacement records a single empty row as `after`.
    pub fn splice(
        doc: &Document,
        at: usize,
        remove: usize,
        mut after: Vec<Vec<char>>,
    ) -> EditorResult<Self> {
        let end = at.saturating_add(remove);
        if at > doc.num_rows() || end > doc.num_rows() {
            return Err(EditorError::InvalidIndex {
                index: end.max(at),
                len: doc.num_rows(),
            });
        }
        if after.is_empty() && remove == doc.num_rows() {
            after.push(vec![]);
        }
        let before = doc.rows()[at..end]
            .iter()
            .map(|row| row.chars().to_vec())
            .collect();
        Ok(Self { at, before, after })
    }

    #[must_use]
    pub fn at(&self) -> usize { self.at }

    #[must_use]
    pub fn before(&self) -> &[Vec<char>] { &self.before }

    #[must_use]
    pub fn after(&self) -> &[Vec<char>] { &self.after }

    /// Returns the rows that were re-highlighted.
    pub fn apply(&self, doc: &mut Document) -> EditorResult<Range<usize>> {
        doc.replace_rows(self.at, self.before.len(), self.after.clone())
    }

    pub fn undo(&self, doc: &mut Document) -> EditorResult<Range<usize>> {
        doc.replace_rows(self.at, self.after.len(), self.before.clone())
    }

    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            at: self.at,
            before: self.after.clone(),
            after: self.before.clone(),
        }
    }
}

/// Character level edits. Each builds a [`Change`], applies it, and hands it back so
/// the caller can keep it for undo.
impl Document {
    pub fn insert_char(&mut self, row: usize, at: usize, ch: char) -> EditorResult<Change> {
        let mut chars = self.row_chars(row)?;
        if at > chars.len() {
            return Err(EditorError::InvalidIndex {
                index: at,
                len: chars.len(),
            });
        }
        chars.insert(at, ch);
        let change = Change::edit_row(self, row, chars)?;
        self.commit(change)
    }

    /// Delete the char at `at`. Nothing to delete at the end of the row.
    pub fn delete_char(&mut self, row: usize, at: usize) -> EditorResult<Option<Change>> {
        let mut chars = self.row_chars(row)?;
        if at > chars.len() {
            return Err(EditorError::InvalidIndex {
                index: at,
                len: chars.len(),
            });
        }
        if at == chars.len() {
            return Ok(None);
        }
        chars.remove(at);
        let change = Change::edit_row(self, row, chars)?;
        self.commit(change).map(Some)
    }

    /// Break row `row` in two at `at`.
    pub fn split_row(&mut self, row: usize, at: usize) -> EditorResult<Change> {
        let mut left = self.row_chars(row)?;
        if at > left.len() {
            return Err(EditorError::InvalidIndex {
                index: at,
                len: left.len(),
            });
        }
        let right = left.split_off(at);
        let change = Change::splice(self, row, 1, vec![left, right])?;
        self.commit(change)
    }

    /// Append row `row` to the one above it. Nothing happens for the first row.
    pub fn join_with_previous(&mut self, row: usize) -> EditorResult<Option<Change>> {
        let current = self.row_chars(row)?;
        if row == 0 {
            return Ok(None);
        }
        let mut joined = self.row_chars(row - 1)?;
        joined.extend(current);
        let change = Change::splice(self, row - 1, 2, vec![joined])?;
        self.commit(change).map(Some)
    }

    fn commit(&mut self, change: Change) -> EditorResult<Change> {
        change.apply(self)?;
        Ok(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chars(s: &str) -> Vec<char> { s.chars().collect() }

    fn doc(lines: &[&str]) -> Document {
        let mut it = Document::default();
        it.open_from_lines(lines);
        it
    }

    fn assert_inverse(lines: &[&str], make: impl Fn(&Document) -> EditorResult<Change>) {
        let mut doc = doc(lines);
        let original = doc.lines();
        let change = make(&doc).unwrap();
        change.apply(&mut doc).unwrap();
        change.undo(&mut doc).unwrap();
        assert_eq!(doc.lines(), original);
    }

    #[test]
    fn test_undo_restores_edit() {
        assert_inverse(&["a", "b"], |doc| Change::edit_row(doc, 1, chars("bee")));
    }

    #[test]
    fn test_undo_restores_insert() {
        assert_inverse(&["a", "b"], |doc| {
            Change::insert_rows(doc, 2, vec![chars("c"), chars("d")])
        });
    }

    #[test]
    fn test_undo_restores_partial_delete() {
        assert_inverse(&["a", "b", "c"], |doc| Change::delete_rows(doc, 1, 2));
    }

    #[test]
    fn test_undo_restores_delete_of_everything() {
        let mut doc = doc(&["a", "b"]);
        let change = Change::delete_rows(&doc, 0, 1).unwrap();
        change.apply(&mut doc).unwrap();
        assert_eq!(doc.lines(), vec![String::new()]);
        change.undo(&mut doc).unwrap();
        assert_eq!(doc.lines(), vec!["a", "b"]);
    }

    #[test]
    fn test_splice_that_empties_the_document_is_reversible() {
        let mut doc = doc(&["a", "b"]);
        let change = Change::splice(&doc, 0, 2, vec![]).unwrap();
        assert_eq!(change.after(), &[Vec::<char>::new()]);

        change.apply(&mut doc).unwrap();
        assert_eq!(doc.lines(), vec![String::new()]);
        change.undo(&mut doc).unwrap();
        assert_eq!(doc.lines(), vec!["a", "b"]);
    }

    #[test]
    fn test_inverse_swaps_sides() {
        let doc = doc(&["a"]);
        let change = Change::edit_row(&doc, 0, chars("b")).unwrap();
        let inverse = change.inverse();
        assert_eq!(inverse.before(), change.after());
        assert_eq!(inverse.after(), change.before());
        assert_eq!(inverse.inverse(), change);
    }

    #[test]
    fn test_char_edits() {
        let mut doc = doc(&["ac", "de"]);
        let insert = doc.insert_char(0, 1, 'b').unwrap();
        assert_eq!(doc.lines(), vec!["abc", "de"]);

        let split = doc.split_row(0, 2).unwrap();
        assert_eq!(doc.lines(), vec!["ab", "c", "de"]);

        let join = doc.join_with_previous(2).unwrap().unwrap();
        assert_eq!(doc.lines(), vec!["ab", "cde"]);

        let delete = doc.delete_char(1, 0).unwrap().unwrap();
        assert_eq!(doc.lines(), vec!["ab", "de"]);

        for change in [delete, join, split, insert] {
            change.undo(&mut doc).unwrap();
        }
        assert_eq!(doc.lines(), vec!["ac", "de"]);
    }

    #[test]
    fn test_char_edit_boundaries() {
        let mut doc = doc(&["ab"]);
        assert_eq!(doc.delete_char(0, 2).unwrap(), None);
        assert_eq!(doc.join_with_previous(0).unwrap(), None);
        assert!(matches!(
            doc.insert_char(0, 3, 'x'),
            Err(EditorError::InvalidIndex { index: 3, len: 2 })
        ));
        assert!(matches!(
            doc.split_row(1, 0),
            Err(EditorError::InvalidIndex { .. })
        ));
        assert_eq!(doc.lines(), vec!["ab"]);
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_split_at_row_end_adds_empty_row() {
        let mut doc = doc(&["ab"]);
        doc.split_row(0, 2).unwrap();
        assert_eq!(doc.lines(), vec!["ab", ""]);
    }
}
