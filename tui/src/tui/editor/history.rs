// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Change, Document};
use crate::EditorResult;
use std::collections::VecDeque;

pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// Applied changes, newest last. The oldest are dropped once the stack is full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    changes: VecDeque<Change>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self { Self::new(DEFAULT_HISTORY_CAPACITY) }
}

impl History {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            changes: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record a change that has already been applied.
    pub fn push(&mut self, change: Change) {
        if self.changes.len() == self.capacity {
            self.changes.pop_front();
        }
        self.changes.push_back(change);
    }

    /// Reverse the newest change. Returns it so the caller can move the cursor to it.
    /// A change that fails to undo stays on the stack.
    pub fn undo(&mut self, doc: &mut Document) -> EditorResult<Option<Change>> {
        let Some(change) = self.changes.back() else {
            return Ok(None);
        };
        change.undo(doc)?;
        Ok(self.changes.pop_back())
    }

    #[must_use]
    pub fn len(&self) -> usize { self.changes.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.changes.is_empty() }

    pub fn clear(&mut self) { self.changes.clear(); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_undo_in_reverse_order() {
        let mut doc = Document::default();
        doc.open_from_lines(["x"]);
        let mut history = History::default();

        history.push(doc.insert_char(0, 1, 'y').unwrap());
        history.push(doc.split_row(0, 1).unwrap());
        assert_eq!(doc.lines(), vec!["x", "y"]);

        let undone = history.undo(&mut doc).unwrap().unwrap();
        assert_eq!(undone.at(), 0);
        assert_eq!(doc.lines(), vec!["xy"]);
        history.undo(&mut doc).unwrap();
        assert_eq!(doc.lines(), vec!["x"]);
        assert_eq!(history.undo(&mut doc).unwrap(), None);
    }

    #[test]
    fn test_failed_undo_keeps_the_change() {
        let mut doc = Document::default();
        doc.open_from_lines(["a", "b", "c"]);
        let mut history = History::default();
        history.push(doc.insert_char(2, 0, 'x').unwrap());

        doc.open_from_lines(["only"]);
        assert!(matches!(
            history.undo(&mut doc),
            Err(crate::EditorError::InvalidIndex { .. })
        ));
        assert_eq!(history.len(), 1);
        assert_eq!(doc.lines(), vec!["only"]);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut doc = Document::default();
        let mut history = History::new(2);
        for ch in ['a', 'b', 'c'] {
            history.push(doc.insert_char(0, 0, ch).unwrap());
        }
        assert_eq!(history.len(), 2);
        history.undo(&mut doc).unwrap();
        history.undo(&mut doc).unwrap();
        assert_eq!(doc.lines(), vec!["a"]);
        assert!(history.is_empty());
    }
}
