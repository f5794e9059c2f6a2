// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Category assigned to each position of a row's render string.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
pub enum HighlightClass {
    #[default]
    Normal,
    Comment,
    MlComment,
    Keyword1,
    Keyword2,
    String,
    Number,
    /// Only ever applied as an overlay when drawing the current search match.
    Match,
}

/// Chars that end a number or keyword and allow one to start.
#[must_use]
pub fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ",.()+-/*=~%<>[]{}:;".contains(ch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(' ')]
    #[test_case('\t')]
    #[test_case(',')]
    #[test_case('(')]
    #[test_case(';')]
    #[test_case('~')]
    fn test_separators(ch: char) {
        assert!(is_separator(ch));
    }

    #[test_case('a')]
    #[test_case('_')]
    #[test_case('0')]
    #[test_case('"')]
    fn test_non_separators(ch: char) {
        assert!(!is_separator(ch));
    }
}
