// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::HighlightClass;
use std::collections::HashMap;

/// SGR foreground used for a class the scheme has no entry for.
pub const MISSING_CLASS_COLOR: u8 = 37;

/// Maps highlight classes to SGR foreground parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    colors: HashMap<HighlightClass, u8>,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::empty()
            .with(HighlightClass::Normal, 39)
            .with(HighlightClass::Comment, 90)
            .with(HighlightClass::MlComment, 90)
            .with(HighlightClass::Keyword1, 94)
            .with(HighlightClass::Keyword2, 96)
            .with(HighlightClass::String, 36)
            .with(HighlightClass::Number, 33)
            .with(HighlightClass::Match, 32)
    }
}

impl ColorScheme {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, class: HighlightClass, sgr: u8) -> Self {
        self.colors.insert(class, sgr);
        self
    }

    #[must_use]
    pub fn color_for(&self, class: HighlightClass) -> u8 {
        self.colors
            .get(&class)
            .copied()
            .unwrap_or(MISSING_CLASS_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_covers_every_class() {
        let scheme = ColorScheme::default();
        for class in HighlightClass::iter() {
            assert_ne!(scheme.color_for(class), MISSING_CLASS_COLOR, "{class}");
        }
        assert_eq!(scheme.color_for(HighlightClass::Keyword1), 94);
    }

    #[test]
    fn test_missing_class() {
        let scheme = ColorScheme::empty().with(HighlightClass::String, 31);
        assert_eq!(scheme.color_for(HighlightClass::String), 31);
        assert_eq!(scheme.color_for(HighlightClass::Number), MISSING_CLASS_COLOR);
    }
}
