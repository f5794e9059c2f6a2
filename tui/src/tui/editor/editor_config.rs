// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const DEFAULT_TAB_STOP: usize = 8;

/// Knobs that affect how rows are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    tab_stop: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: DEFAULT_TAB_STOP,
        }
    }
}

impl EditorConfig {
    /// A tab stop of 0 would make tabs vanish, it is raised to 1.
    #[must_use]
    pub fn with_tab_stop(mut self, tab_stop: usize) -> Self {
        self.tab_stop = tab_stop.max(1);
        self
    }

    #[must_use]
    pub fn tab_stop(&self) -> usize { self.tab_stop }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tab_stop() {
        assert_eq!(EditorConfig::default().tab_stop(), 8);
        assert_eq!(EditorConfig::default().with_tab_stop(4).tab_stop(), 4);
        assert_eq!(EditorConfig::default().with_tab_stop(0).tab_stop(), 1);
    }
}
