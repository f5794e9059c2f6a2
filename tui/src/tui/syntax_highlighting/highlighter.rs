// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Per-row tokenizer.
//!
//! A row is scanned left to right once. The only state that crosses row boundaries is
//! whether a multi-line comment is still open at the end of the row (the row's
//! continuation flag). The caller feeds the previous row's flag in and is responsible
//! for re-running the next row when the flag it gets back has changed, see
//! [`crate::Document`].

use super::{HighlightClass, SyntaxDefinition, is_separator};

/// Result of highlighting one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowHighlight {
    /// One entry per char of the render string.
    pub classes: Vec<HighlightClass>,
    /// A multi-line comment is open at the end of the row.
    pub continuation: bool,
}

/// Highlight `render` (the tab-expanded row) given the continuation flag of the row
/// above. Without a syntax every position is [`HighlightClass::Normal`].
#[must_use]
pub fn highlight_row(
    render: &[char],
    prev_continuation: bool,
    syntax: Option<&SyntaxDefinition>,
) -> RowHighlight {
    let mut classes = vec![HighlightClass::Normal; render.len()];

    let Some(syntax) = syntax else {
        return RowHighlight {
            classes,
            continuation: false,
        };
    };

    let single_line_comment: Option<Vec<char>> =
        syntax.single_line_comment.map(|it| it.chars().collect());
    let multi_line_comment: Option<(Vec<char>, Vec<char>)> = syntax
        .multi_line_comment
        .map(|(start, end)| (start.chars().collect(), end.chars().collect()));

    let mut prev_sep = true;
    let mut string_quote: Option<char> = None;
    let mut in_comment = prev_continuation;
    let mut i = 0;

    while i < render.len() {
        let ch = render[i];
        let prev_class = if i > 0 {
            classes[i - 1]
        } else {
            HighlightClass::Normal
        };

        if let Some(marker) = &single_line_comment
            && string_quote.is_none()
            && !in_comment
            && starts_with_at(render, i, marker)
        {
            classes[i..].fill(HighlightClass::Comment);
            break;
        }

        if let Some((start, end)) = &multi_line_comment
            && string_quote.is_none()
        {
            if in_comment {
                if starts_with_at(render, i, end) {
                    classes[i..i + end.len()].fill(HighlightClass::MlComment);
                    i += end.len();
                    in_comment = false;
                    prev_sep = true;
                } else {
                    classes[i] = HighlightClass::MlComment;
                    i += 1;
                }
                continue;
            }
            if starts_with_at(render, i, start) {
                classes[i..i + start.len()].fill(HighlightClass::MlComment);
                i += start.len();
                in_comment = true;
                continue;
            }
        }

        if syntax.highlight_strings {
            if let Some(quote) = string_quote {
                classes[i] = HighlightClass::String;
                if ch == '\\' && i + 1 < render.len() {
                    classes[i + 1] = HighlightClass::String;
                    i += 2;
                    continue;
                }
                if ch == quote {
                    string_quote = None;
                }
                i += 1;
                prev_sep = true;
                continue;
            }
            if ch == '"' || ch == '\'' {
                string_quote = Some(ch);
                classes[i] = HighlightClass::String;
                i += 1;
                continue;
            }
        }

        if syntax.highlight_numbers
            && ((ch.is_ascii_digit() && (prev_sep || prev_class == HighlightClass::Number))
                || (ch == '.' && prev_class == HighlightClass::Number))
        {
            classes[i] = HighlightClass::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        if prev_sep && let Some((class, len)) = match_keyword(render, i, syntax) {
            classes[i..i + len].fill(class);
            i += len;
            prev_sep = false;
            continue;
        }

        prev_sep = is_separator(ch);
        i += 1;
    }

    RowHighlight {
        classes,
        continuation: in_comment,
    }
}

fn starts_with_at(haystack: &[char], at: usize, needle: &[char]) -> bool {
    !needle.is_empty() && haystack[at..].starts_with(needle)
}

/// First keyword class (in definition order) with a keyword starting at `at` and
/// followed by a separator or the end of the row. Within a class the longest such
/// keyword wins. Returns the class and the keyword length in chars.
fn match_keyword(
    render: &[char],
    at: usize,
    syntax: &SyntaxDefinition,
) -> Option<(HighlightClass, usize)> {
    syntax.keywords.iter().find_map(|keyword_class| {
        keyword_class
            .words
            .iter()
            .filter_map(|word| {
                let len = word.chars().count();
                let candidate = render.get(at..at + len)?;
                let is_match = candidate.iter().copied().eq(word.chars())
                    && render.get(at + len).is_none_or(|next| is_separator(*next));
                is_match.then_some(len)
            })
            .max()
            .map(|len| (keyword_class.class, len))
    })
}
