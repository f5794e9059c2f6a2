// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::Document;

/// Where a search query was found, in char indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    pub row: usize,
    pub char_index: usize,
    pub len: usize,
}

impl SearchMatch {
    #[must_use]
    pub fn end(&self) -> usize { self.char_index + self.len }
}

/// Plain substring search, wrapping around the document.
impl Document {
    /// First match at or after `(row, char_index)`.
    #[must_use]
    pub fn find(&self, query: &str, row: usize, char_index: usize) -> Option<SearchMatch> {
        let needle: Vec<char> = query.chars().collect();
        let num_rows = self.num_rows();
        if needle.is_empty() || row >= num_rows {
            return None;
        }

        for step in 0..=num_rows {
            let y = (row + step) % num_rows;
            let chars = self.rows()[y].chars();
            let hit = match step {
                0 => find_from(chars, &needle, char_index),
                // Back on the starting row, only the part before the start is left.
                _ if step == num_rows => {
                    find_from(chars, &needle, 0).filter(|it| *it < char_index)
                }
                _ => find_from(chars, &needle, 0),
            };
            if let Some(char_index) = hit {
                return Some(SearchMatch {
                    row: y,
                    char_index,
                    len: needle.len(),
                });
            }
        }
        None
    }

    /// Last match starting before `(row, char_index)`.
    #[must_use]
    pub fn find_back(&self, query: &str, row: usize, char_index: usize) -> Option<SearchMatch> {
        let needle: Vec<char> = query.chars().collect();
        let num_rows = self.num_rows();
        if needle.is_empty() || row >= num_rows {
            return None;
        }

        for step in 0..=num_rows {
            let y = (row + num_rows - step % num_rows) % num_rows;
            let chars = self.rows()[y].chars();
            let hit = match step {
                0 => find_before(chars, &needle, char_index),
                _ if step == num_rows => {
                    find_before(chars, &needle, chars.len() + 1).filter(|it| *it >= char_index)
                }
                _ => find_before(chars, &needle, chars.len() + 1),
            };
            if let Some(char_index) = hit {
                return Some(SearchMatch {
                    row: y,
                    char_index,
                    len: needle.len(),
                });
            }
        }
        None
    }
}

fn find_from(haystack: &[char], needle: &[char], start: usize) -> Option<usize> {
    if start >= haystack.len() {
        return None;
    }
    haystack[start..]
        .windows(needle.len())
        .position(|it| it == needle)
        .map(|it| it + start)
}

/// Rightmost match whose start is `< end`.
fn find_before(haystack: &[char], needle: &[char], end: usize) -> Option<usize> {
    haystack
        .windows(needle.len())
        .take(end)
        .rposition(|it| it == needle)
}
