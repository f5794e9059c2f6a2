// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

/// Rows whose content or highlighting changed since the damage was last taken.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RowDamage {
    #[default]
    Clean,
    Rows(Range<usize>),
    /// Rows were inserted or removed, or the whole document was re-highlighted.
    All,
}

impl RowDamage {
    /// Grow to cover `rows` as well.
    pub fn add(&mut self, rows: Range<usize>) {
        if rows.is_empty() {
            return;
        }
        *self = match std::mem::take(self) {
            RowDamage::Clean => RowDamage::Rows(rows),
            RowDamage::Rows(it) => RowDamage::Rows(it.start.min(rows.start)..it.end.max(rows.end)),
            RowDamage::All => RowDamage::All,
        };
    }

    pub fn add_all(&mut self) { *self = RowDamage::All; }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ranges_merge_and_all_absorbs() {
        let mut damage = RowDamage::default();
        damage.add(3..3);
        assert_eq!(damage, RowDamage::Clean);

        damage.add(4..5);
        damage.add(1..2);
        assert_eq!(damage, RowDamage::Rows(1..5));

        damage.add_all();
        damage.add(0..1);
        assert_eq!(damage, RowDamage::All);
    }
}
