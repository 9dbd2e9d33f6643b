// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Every piece of text the editor shows, each with a fixed template.

use crate::{EditorGlyph, FILENAME_DISPLAY_MAX_LEN};

#[must_use]
pub fn initial_help_msg() -> String {
    "CTRL-Q To Quit - CTRL-S To Save - Asterisk (*) means file has been modified since \
     last save"
        .to_string()
}

#[must_use]
pub fn quit_warning_msg(remaining: u8) -> String {
    format!(
        "WARNING! File has unsaved changes. Press CTRL-Q {remaining} more times to confirm."
    )
}

#[must_use]
pub fn save_as_prompt_msg(input: &str) -> String { format!("Save As: {input}") }

#[must_use]
pub fn save_aborted_msg() -> String { "Save aborted".to_string() }

#[must_use]
pub fn save_succeeded_msg(bytes_written: usize, filename: &str) -> String {
    format!("Wrote {bytes_written} bytes to file: {filename}")
}

#[must_use]
pub fn save_failed_msg(error: &dyn std::error::Error) -> String {
    format!("Can't save! I/O error: {error}")
}

/// Left side of the info bar: the filename (or a placeholder) with a dirty marker,
/// truncated to [`FILENAME_DISPLAY_MAX_LEN`] bytes.
#[must_use]
pub fn info_bar_filename(maybe_filename: Option<&str>, is_dirty: bool) -> String {
    let mut acc = maybe_filename
        .unwrap_or(EditorGlyph::Untitled.as_ref())
        .to_string();
    if is_dirty {
        acc.push_str(EditorGlyph::DirtyMarker.as_ref());
    }
    truncate_to_byte_len(&mut acc, FILENAME_DISPLAY_MAX_LEN);
    acc
}

/// Right side of the info bar. `row` is shown 1-based, `col` is the 0-based byte
/// offset.
#[must_use]
pub fn info_bar_position(row: usize, num_lines: usize, col: usize, line_len: usize) -> String {
    format!("Line: {}/{num_lines}, Col {col}/{line_len}", row + 1)
}

/// Truncate on a char boundary at or before `max_len` bytes.
pub fn truncate_to_byte_len(text: &mut String, max_len: usize) {
    if text.len() <= max_len {
        return;
    }
    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(None, false => "[Untitled]"; "untitled")]
    #[test_case(None, true => "[Untitled]*"; "untitled dirty")]
    #[test_case(Some("notes.txt"), true => "notes.txt*"; "named dirty")]
    #[test_case(
        Some("a_really_long_file_name.txt"), false => "a_really_long_file_n";
        "truncated"
    )]
    #[test_case(
        Some("exactly_twenty_chars"), true => "exactly_twenty_chars";
        "dirty marker truncated away"
    )]
    fn test_info_bar_filename(filename: Option<&str>, is_dirty: bool) -> String {
        info_bar_filename(filename, is_dirty)
    }

    #[test]
    fn test_info_bar_position() {
        assert_eq!(info_bar_position(0, 3, 2, 5), "Line: 1/3, Col 2/5");
        assert_eq!(info_bar_position(0, 0, 0, 0), "Line: 1/0, Col 0/0");
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        let mut it = "ab€".to_string();
        truncate_to_byte_len(&mut it, 3);
        assert_eq!(it, "ab");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            quit_warning_msg(2),
            "WARNING! File has unsaved changes. Press CTRL-Q 2 more times to confirm."
        );
        assert_eq!(save_as_prompt_msg("a.txt"), "Save As: a.txt");
        assert_eq!(
            save_succeeded_msg(5, "a.txt"),
            "Wrote 5 bytes to file: a.txt"
        );
        let error = std::io::Error::other("disk full");
        assert_eq!(save_failed_msg(&error), "Can't save! I/O error: disk full");
    }
}
