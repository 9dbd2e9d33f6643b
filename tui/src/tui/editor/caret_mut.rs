// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Caret movement. Every function here leaves `logical_col` clamped to the length of
//! the line the caret ends up on, and returns whether the caret moved.

use crate::{Cursor, Document};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaretDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Move one step in `direction`. Left and right wrap across line boundaries, up and
/// down keep the column (clamped to the new line).
pub fn move_caret(
    cursor: &mut Cursor,
    document: &Document,
    direction: CaretDirection,
) -> bool {
    let before = (cursor.logical_row, cursor.logical_col);
    let num_lines = document.num_lines();
    let current_line_len = document.line_len(cursor.logical_row);

    match direction {
        CaretDirection::Left => {
            if cursor.logical_col > 0 {
                cursor.logical_col -= 1;
            } else if cursor.logical_row > 0 {
                cursor.logical_row -= 1;
                cursor.logical_col = document.line_len(cursor.logical_row);
            }
        }
        CaretDirection::Right => {
            if cursor.logical_row < num_lines {
                if cursor.logical_col < current_line_len {
                    cursor.logical_col += 1;
                } else if cursor.logical_row + 1 < num_lines {
                    cursor.logical_row += 1;
                    cursor.logical_col = 0;
                }
            }
        }
        CaretDirection::Up => {
            cursor.logical_row = cursor.logical_row.saturating_sub(1);
        }
        CaretDirection::Down => {
            if cursor.logical_row + 1 < num_lines {
                cursor.logical_row += 1;
            }
        }
    }

    clamp_col_to_line(cursor, document);
    before != (cursor.logical_row, cursor.logical_col)
}

/// Repeat [`move_caret`] `count` times, eg: for page up / page down.
pub fn move_caret_by(
    cursor: &mut Cursor,
    document: &Document,
    direction: CaretDirection,
    count: usize,
) -> bool {
    let mut moved = false;
    for _ in 0..count {
        moved |= move_caret(cursor, document, direction);
    }
    moved
}

pub fn move_caret_to_line_start(cursor: &mut Cursor) -> bool {
    let moved = cursor.logical_col != 0;
    cursor.logical_col = 0;
    moved
}

pub fn move_caret_to_line_end(cursor: &mut Cursor, document: &Document) -> bool {
    let end = document.line_len(cursor.logical_row);
    let moved = cursor.logical_col != end;
    cursor.logical_col = end;
    moved
}

pub fn clamp_col_to_line(cursor: &mut Cursor, document: &Document) {
    cursor.logical_col = cursor
        .logical_col
        .min(document.line_len(cursor.logical_row));
}
