// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Document, Size, advance_render_col};

/// Where the caret is. `logical_row` may be `num_lines` (one past the last line), and
/// `logical_col` is a byte offset in `0..=line_len`.
///
/// `render_col` is derived from `logical_col` by [`Viewport::recompute_scroll`] once per
/// frame. Nothing else writes to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub logical_col: usize,
    pub logical_row: usize,
    pub render_col: usize,
}

/// Shorthand to build a [`Cursor`] with a zero `render_col`.
#[macro_export]
macro_rules! cursor {
    (col: $col:expr, row: $row:expr $(,)?) => {
        $crate::Cursor {
            logical_col: $col,
            logical_row: $row,
            render_col: 0,
        }
    };
}

/// The window onto the document. `size` is the area for document text, with the two
/// bottom bars already taken off.
///
/// After [`Self::recompute_scroll`] (as long as `size` has at least one row and one
/// column):
/// - `row_offset <= cursor.logical_row <= row_offset + rows - 1`
/// - `col_offset <= cursor.render_col <= col_offset + cols - 1`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub row_offset: usize,
    pub col_offset: usize,
    pub size: Size,
}

/// Walks `content[0..logical_col)` with the same tab stop rule as
/// [`crate::compute_render`]. A `logical_col` past the end is treated as the end.
#[must_use]
pub fn logical_to_render_col(content: &[u8], logical_col: usize) -> usize {
    content
        .iter()
        .take(logical_col)
        .fold(0, |render_col, byte| advance_render_col(render_col, *byte))
}

/// Clamps `value` into `low..=high`, applying `high` last. So when `low > high` the
/// result is `high`.
#[must_use]
pub fn clamp_lower_then_upper(value: usize, low: usize, high: usize) -> usize {
    value.max(low).min(high)
}

impl Viewport {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Updates `cursor.render_col`, then scrolls just enough for the cursor to be
    /// visible. Negative lower bounds saturate at 0.
    pub fn recompute_scroll(&mut self, cursor: &mut Cursor, document: &Document) {
        cursor.render_col = document.line(cursor.logical_row).map_or(0, |line| {
            logical_to_render_col(line.content(), cursor.logical_col)
        });

        self.row_offset = clamp_lower_then_upper(
            self.row_offset,
            (cursor.logical_row + 1).saturating_sub(self.size.row_count),
            cursor.logical_row,
        );
        self.col_offset = clamp_lower_then_upper(
            self.col_offset,
            (cursor.render_col + 1).saturating_sub(self.size.col_count),
            cursor.render_col,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size;
    use test_case::test_case;

    #[test_case(b"", 0 => 0; "empty")]
    #[test_case(b"abc", 2 => 2; "plain")]
    #[test_case(b"\tx", 1 => 4; "after tab")]
    #[test_case(b"\tx", 2 => 5; "after tab and char")]
    #[test_case(b"ab\t", 3 => 4; "tab mid stop")]
    #[test_case(b"abc", 9 => 3; "past the end")]
    fn test_logical_to_render_col(content: &[u8], logical_col: usize) -> usize {
        logical_to_render_col(content, logical_col)
    }

    #[test]
    fn test_render_col_matches_render_cache() {
        let content = b"a\tbc\t\td";
        let render = crate::compute_render(content);
        for (logical_col, byte) in content.iter().enumerate() {
            let render_col = logical_to_render_col(content, logical_col);
            if *byte != b'\t' {
                assert_eq!(render[render_col], *byte);
            }
        }
        assert_eq!(logical_to_render_col(content, content.len()), render.len());
    }

    #[test_case(5, 0, 10 => 5; "inside")]
    #[test_case(0, 3, 10 => 3; "below low")]
    #[test_case(20, 3, 10 => 10; "above high")]
    #[test_case(5, 8, 2 => 2; "low above high picks high")]
    fn test_clamp(value: usize, low: usize, high: usize) -> usize {
        clamp_lower_then_upper(value, low, high)
    }

    #[test]
    fn test_empty_document_collapses_to_zero() {
        let mut viewport = Viewport::new(size!(col_count: 10, row_count: 5));
        let mut cursor = Cursor::default();
        viewport.recompute_scroll(&mut cursor, &Document::default());
        assert_eq!((viewport.row_offset, viewport.col_offset), (0, 0));
        assert_eq!(cursor.render_col, 0);
    }

    #[test]
    fn test_scrolls_down_and_back_up() {
        let document = Document::from_lines((0..50).map(|it| format!("{it}").into_bytes()));
        let mut viewport = Viewport::new(size!(col_count: 10, row_count: 5));

        let mut cursor = cursor!(col: 0, row: 12);
        viewport.recompute_scroll(&mut cursor, &document);
        assert_eq!(viewport.row_offset, 8);

        let mut cursor = cursor!(col: 0, row: 10);
        viewport.recompute_scroll(&mut cursor, &document);
        assert_eq!(viewport.row_offset, 8);

        let mut cursor = cursor!(col: 0, row: 3);
        viewport.recompute_scroll(&mut cursor, &document);
        assert_eq!(viewport.row_offset, 3);
    }

    #[test]
    fn test_scrolls_right_by_render_col() {
        let document = Document::from_lines([b"\t\t\tabc".to_vec()]);
        let mut viewport = Viewport::new(size!(col_count: 8, row_count: 3));
        let mut cursor = cursor!(col: 4, row: 0);
        viewport.recompute_scroll(&mut cursor, &document);
        assert_eq!(cursor.render_col, 13);
        assert_eq!(viewport.col_offset, 6);
    }

    #[test]
    fn test_row_invariant_holds_for_every_cursor_row() {
        for num_lines in [0_usize, 1, 3, 7, 40] {
            for height in [1_usize, 2, 5, 13] {
                let document =
                    Document::from_lines((0..num_lines).map(|_| b"line".to_vec()));
                let mut viewport = Viewport::new(size!(col_count: 20, row_count: height));
                // Visit rows in a zig zag, so offsets carry over between recomputes.
                let rows = (0..=num_lines).chain((0..=num_lines).rev());
                for row in rows {
                    let mut cursor = cursor!(col: 0, row: row);
                    viewport.recompute_scroll(&mut cursor, &document);
                    assert!(viewport.row_offset <= num_lines.saturating_sub(1).max(row));
                    assert!(viewport.row_offset <= row);
                    assert!(row < viewport.row_offset + height);
                }
            }
        }
    }
}
