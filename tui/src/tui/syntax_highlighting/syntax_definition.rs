// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::HighlightClass;
use std::path::Path;

/// Words that share one highlight class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordClass {
    pub class: HighlightClass,
    pub words: Vec<&'static str>,
}

/// How to highlight one file type. Immutable once built, selected per file by
/// extension.
///
/// Keyword classes are tried in the order they were added, and the first class with
/// a match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxDefinition {
    pub filetype: &'static str,
    pub file_extensions: Vec<&'static str>,
    pub keywords: Vec<KeywordClass>,
    pub single_line_comment: Option<&'static str>,
    pub multi_line_comment: Option<(&'static str, &'static str)>,
    pub highlight_strings: bool,
    pub highlight_numbers: bool,
}

impl SyntaxDefinition {
    #[must_use]
    pub fn new(filetype: &'static str) -> Self {
        Self {
            filetype,
            file_extensions: vec![],
            keywords: vec![],
            single_line_comment: None,
            multi_line_comment: None,
            highlight_strings: false,
            highlight_numbers: false,
        }
    }

    #[must_use]
    pub fn with_extensions(mut self, extensions: &[&'static str]) -> Self {
        self.file_extensions.extend_from_slice(extensions);
        self
    }

    #[must_use]
    pub fn with_keywords(mut self, class: HighlightClass, words: &[&'static str]) -> Self {
        self.keywords.push(KeywordClass {
            class,
            words: words.to_vec(),
        });
        self
    }

    #[must_use]
    pub fn with_single_line_comment(mut self, start: &'static str) -> Self {
        self.single_line_comment = Some(start);
        self
    }

    #[must_use]
    pub fn with_multi_line_comment(mut self, start: &'static str, end: &'static str) -> Self {
        self.multi_line_comment = Some((start, end));
        self
    }

    #[must_use]
    pub fn with_strings(mut self) -> Self {
        self.highlight_strings = true;
        self
    }

    #[must_use]
    pub fn with_numbers(mut self) -> Self {
        self.highlight_numbers = true;
        self
    }

    /// Case sensitive match on the extension, without the dot.
    #[must_use]
    pub fn matches_extension(&self, extension: &str) -> bool {
        self.file_extensions.contains(&extension)
    }
}

/// Picks a syntax for a file extension (without the dot).
pub trait SyntaxSelector {
    fn select(&self, extension: &str) -> Option<SyntaxDefinition>;
}

/// A list of definitions is a selector: first one claiming the extension wins.
impl SyntaxSelector for [SyntaxDefinition] {
    fn select(&self, extension: &str) -> Option<SyntaxDefinition> {
        self.iter().find(|it| it.matches_extension(extension)).cloned()
    }
}

impl SyntaxSelector for Vec<SyntaxDefinition> {
    fn select(&self, extension: &str) -> Option<SyntaxDefinition> {
        self.as_slice().select(extension)
    }
}

/// Selection based on the extension of `path`, if it has one.
pub fn select_for_path(
    selector: &(impl SyntaxSelector + ?Sized),
    path: &Path,
) -> Option<SyntaxDefinition> {
    let extension = path.extension()?.to_str()?;
    selector.select(extension)
}
