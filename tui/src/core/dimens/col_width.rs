// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          ops::{Add, Deref}};

use crate::{RowHeight, Size};

/// Width in terminal display columns.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct ColWidth(pub usize);

impl Debug for ColWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ColWidth({:?})", self.0)
    }
}

pub fn width(arg_col_width: impl Into<ColWidth>) -> ColWidth { arg_col_width.into() }

impl ColWidth {
    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }
}

impl From<usize> for ColWidth {
    fn from(val: usize) -> Self { ColWidth(val) }
}

impl From<u16> for ColWidth {
    fn from(val: u16) -> Self { ColWidth(usize::from(val)) }
}

impl Deref for ColWidth {
    type Target = usize;

    fn deref(&self) -> &Self::Target { &self.0 }
}

/// `width(80) + height(24)` is a [`Size`].
impl Add<RowHeight> for ColWidth {
    type Output = Size;

    fn add(self, rhs: RowHeight) -> Self::Output {
        Size {
            col_width: self,
            row_height: rhs,
        }
    }
}
