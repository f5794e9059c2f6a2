// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          ops::{Add, Deref}};

use crate::{ColWidth, Size};

/// Height in terminal rows.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct RowHeight(pub usize);

impl Debug for RowHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RowHeight({:?})", self.0)
    }
}

pub fn height(arg_row_height: impl Into<RowHeight>) -> RowHeight {
    arg_row_height.into()
}

impl RowHeight {
    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }
}

impl From<usize> for RowHeight {
    fn from(val: usize) -> Self { RowHeight(val) }
}

impl From<u16> for RowHeight {
    fn from(val: u16) -> Self { RowHeight(usize::from(val)) }
}

impl Deref for RowHeight {
    type Target = usize;

    fn deref(&self) -> &Self::Target { &self.0 }
}

/// `height(24) + width(80)` is a [`Size`].
impl Add<ColWidth> for RowHeight {
    type Output = Size;

    fn add(self, rhs: ColWidth) -> Self::Output {
        Size {
            col_width: rhs,
            row_height: self,
        }
    }
}
