// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Mapping between a char index into a row and the screen column it is drawn at.
//!
//! Tabs advance to the next multiple of the tab stop. Every other char takes its
//! display width from the Unicode width tables, control chars count as one column
//! because they are drawn as a single inverse glyph.
//!
//! Zero width chars (combining marks) have no column of their own. They share the
//! column of the char after them, so [`rx_to_cx`] never lands on one: the index of a
//! zero width char maps to a column that resolves to the next char that takes up
//! space, or to the row length at the end of the row.

use unicode_width::UnicodeWidthChar;

/// Display width of one char.
#[must_use]
pub fn char_display_width(ch: char) -> usize {
    if ch.is_control() {
        1
    } else {
        UnicodeWidthChar::width(ch).unwrap_or(1)
    }
}

fn advance(col: usize, ch: char, tab_stop: usize) -> usize {
    if ch == '\t' {
        col + tab_stop - (col % tab_stop)
    } else {
        col + char_display_width(ch)
    }
}

/// Render column of the char at `char_index`. Indices past the end are clamped to the
/// row length.
#[must_use]
pub fn cx_to_rx(chars: &[char], tab_stop: usize, char_index: usize) -> usize {
    let tab_stop = tab_stop.max(1);
    chars
        .iter()
        .take(char_index)
        .fold(0, |col, ch| advance(col, *ch, tab_stop))
}

/// Char index drawn at `render_col`. A column in the middle of a tab (or a wide char)
/// resolves to that char. Zero width chars are skipped. Columns past the end resolve
/// to the row length.
#[must_use]
pub fn rx_to_cx(chars: &[char], tab_stop: usize, render_col: usize) -> usize {
    let tab_stop = tab_stop.max(1);
    let mut col = 0;
    for (index, ch) in chars.iter().enumerate() {
        col = advance(col, *ch, tab_stop);
        if col > render_col {
            return index;
        }
    }
    chars.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn chars(it: &str) -> Vec<char> { it.chars().collect() }

    #[test_case("abc", 4, 2, 2)]
    #[test_case("\tx", 4, 1, 4)]
    #[test_case("ab\tx", 4, 3, 4)]
    #[test_case("ab\tx", 8, 3, 8)]
    #[test_case("ab\tx", 8, 4, 9)]
    #[test_case("a😀b", 4, 2, 3)]
    #[test_case("abc", 4, 10, 3)]
    fn test_cx_to_rx(row: &str, tab_stop: usize, cx: usize, expected: usize) {
        assert_eq!(cx_to_rx(&chars(row), tab_stop, cx), expected);
    }

    #[test_case("ab\tx", 4, 2, 2)]
    #[test_case("ab\tx", 4, 3, 2)]
    #[test_case("ab\tx", 4, 4, 3)]
    #[test_case("ab\tx", 4, 99, 4)]
    #[test_case("a😀b", 4, 2, 1)]
    #[test_case("", 4, 5, 0)]
    fn test_rx_to_cx(row: &str, tab_stop: usize, rx: usize, expected: usize) {
        assert_eq!(rx_to_cx(&chars(row), tab_stop, rx), expected);
    }

    /// Index of the first char at or after `i` that takes up a column.
    fn next_visible(row: &[char], i: usize) -> usize {
        (i..row.len())
            .find(|&it| char_display_width(row[it]) > 0 || row[it] == '\t')
            .unwrap_or(row.len())
    }

    /// Every char index survives the round trip, except that a zero width char resolves
    /// to the next char that takes up space. Columns inside a tab's expansion resolve
    /// to the tab itself, the nearest real char to the left.
    #[test]
    fn test_round_trip_for_all_tab_stops() {
        let rows = [
            "",
            "plain",
            "\t\tx",
            "a\tbc\td",
            "x\t😀\t中文\ty",
            "\t",
            "e\u{301}x",
            "\u{301}\te\u{301}\u{302}",
        ];
        for tab_stop in 1..=9 {
            for row in rows {
                let row = chars(row);
                for i in 0..=row.len() {
                    let rx = cx_to_rx(&row, tab_stop, i);
                    assert_eq!(
                        rx_to_cx(&row, tab_stop, rx),
                        next_visible(&row, i),
                        "{row:?} {tab_stop} {i}"
                    );
                }

                for (i, ch) in row.iter().enumerate() {
                    let start = cx_to_rx(&row, tab_stop, i);
                    let end = cx_to_rx(&row, tab_stop, i + 1);
                    for inside in start..end {
                        assert_eq!(rx_to_cx(&row, tab_stop, inside), i, "{ch:?} @ {inside}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_width_char_shares_the_next_column() {
        let row = chars("e\u{301}x");
        assert_eq!(cx_to_rx(&row, 4, 1), 1);
        assert_eq!(cx_to_rx(&row, 4, 2), 1);
        assert_eq!(rx_to_cx(&row, 4, 1), 2);
    }

    #[test]
    fn test_zero_tab_stop_is_treated_as_one() {
        assert_eq!(cx_to_rx(&chars("\t\t"), 0, 2), 2);
        assert_eq!(rx_to_cx(&chars("\t\t"), 0, 1), 1);
    }
}
