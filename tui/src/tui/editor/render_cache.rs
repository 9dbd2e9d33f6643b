// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tab expansion. [`compute_render`] and [`crate::logical_to_render_col`] both walk a
//! line with [`advance_render_col`], so the caret is always drawn on top of the glyph
//! it belongs to.

use crate::TAB_WIDTH;

/// The render column right after a tab that starts at `render_col`. A tab always takes
/// up at least one column.
#[must_use]
pub const fn next_tab_stop(render_col: usize) -> usize {
    (render_col / TAB_WIDTH + 1) * TAB_WIDTH
}

/// The render column right after `byte`, if `byte` is drawn at `render_col`.
#[must_use]
pub const fn advance_render_col(render_col: usize, byte: u8) -> usize {
    if byte == b'\t' {
        next_tab_stop(render_col)
    } else {
        render_col + 1
    }
}

/// Display form of `content`: every tab is replaced by spaces up to the next tab stop,
/// every other byte is copied as is.
#[must_use]
pub fn compute_render(content: &[u8]) -> Vec<u8> {
    let mut acc = Vec::with_capacity(content.len());
    for byte in content {
        let next = advance_render_col(acc.len(), *byte);
        if *byte == b'\t' {
            acc.resize(next, b' ');
        } else {
            acc.push(*byte);
        }
    }
    acc
}
