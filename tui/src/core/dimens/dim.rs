// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use crate::{ColWidth, RowHeight};

/// Terminal window size. Build one with `width(cols) + height(rows)`.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct Size {
    pub col_width: ColWidth,
    pub row_height: RowHeight,
}

impl Debug for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[width:{w:?}, height:{h:?}]",
            w = *self.col_width,
            h = *self.row_height
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{height, width};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_either_order() {
        let a = width(80_usize) + height(24_usize);
        let b = height(24_usize) + width(80_usize);
        assert_eq!(a, b);
        assert_eq!(*a.col_width, 80);
        assert_eq!(*a.row_height, 24);
        assert_eq!(format!("{a:?}"), "[width:80, height:24]");
    }
}
