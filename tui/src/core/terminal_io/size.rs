// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};

/// Dimensions of the terminal window, or of the part of it that shows document text.
/// Each byte of a rendered line takes up exactly one column.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub col_count: usize,
    pub row_count: usize,
}

/// Shorthand to build a [`Size`].
///
/// ```
/// use kilo_tui::{Size, size};
/// let it: Size = size!(col_count: 80, row_count: 24);
/// assert_eq!(it.row_count, 24);
/// ```
#[macro_export]
macro_rules! size {
    (col_count: $col_count:expr, row_count: $row_count:expr $(,)?) => {
        $crate::Size {
            col_count: $col_count,
            row_count: $row_count,
        }
    };
}

impl Size {
    /// crossterm reports sizes as `(columns, rows)`.
    #[must_use]
    pub fn from_crossterm(columns: u16, rows: u16) -> Self {
        Self {
            col_count: usize::from(columns),
            row_count: usize::from(rows),
        }
    }

    /// Remove `row_count` rows from the bottom, saturating at 0. Used to carve the info
    /// bar and status bar off the terminal window.
    #[must_use]
    pub fn sub_rows(self, row_count: usize) -> Self {
        Self {
            col_count: self.col_count,
            row_count: self.row_count.saturating_sub(row_count),
        }
    }
}

impl Debug for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[cols: {}, rows: {}]", self.col_count, self.row_count)
    }
}
