// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The document, as an ordered list of [`Line`]s. Line 0 is the first line of the
//! file.
//!
//! Every mutation is bounds checked up front, and an out of range call is a silent
//! no-op that returns `false`. So a mutation is either fully applied or not applied at
//! all. Whenever a line's content changes, its render form is recomputed in the same
//! call.
//!
//! Rows are indexed `0..num_lines`. The row `num_lines` (one past the last line) is
//! where the caret sits when a new trailing line is about to be typed, so
//! [`Document::insert_char`] and [`Document::split`] accept it too.

use crate::{compute_render, join_lines};

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Line {
    content: Vec<u8>,
    render: Vec<u8>,
}

impl Line {
    #[must_use]
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        let content = content.into();
        let render = compute_render(&content);
        Self { content, render }
    }

    #[must_use]
    pub fn content(&self) -> &[u8] { &self.content }

    /// Tab expanded form of [`Self::content`].
    #[must_use]
    pub fn render(&self) -> &[u8] { &self.render }

    #[must_use]
    pub fn len(&self) -> usize { self.content.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.content.is_empty() }

    fn update_content(&mut self, mutator: impl FnOnce(&mut Vec<u8>)) {
        mutator(&mut self.content);
        self.render = compute_render(&self.content);
    }
}

impl std::fmt::Debug for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.content))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
    is_dirty: bool,
}

/// Constructors and queries.
impl Document {
    /// A clean document holding `lines`, as read from storage.
    #[must_use]
    pub fn from_lines(lines: impl IntoIterator<Item = Vec<u8>>) -> Self {
        Self {
            lines: lines.into_iter().map(Line::new).collect(),
            is_dirty: false,
        }
    }

    /// What the editor starts with when no file is given.
    #[must_use]
    pub fn new_with_one_empty_line() -> Self { Self::from_lines([vec![]]) }

    #[must_use]
    pub fn num_lines(&self) -> usize { self.lines.len() }

    #[must_use]
    pub fn line(&self, row: usize) -> Option<&Line> { self.lines.get(row) }

    /// Length of the line at `row` in bytes. Rows past the end have length 0.
    #[must_use]
    pub fn line_len(&self, row: usize) -> usize { self.line(row).map_or(0, Line::len) }

    #[must_use]
    pub fn lines(&self) -> &[Line] { &self.lines }

    #[must_use]
    pub fn is_dirty(&self) -> bool { self.is_dirty }

    /// Only to be called right after a successful save.
    pub fn mark_clean(&mut self) { self.is_dirty = false; }

    /// The file contents for this document: every line followed by `\n`.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> { join_lines(self.lines.iter().map(Line::content)) }
}

/// Mutations.
impl Document {
    /// Valid `index` range is `0..=num_lines`. Doesn't mark the document dirty, since
    /// loading a file goes through here.
    pub fn insert_line(&mut self, index: usize, content: impl Into<Vec<u8>>) -> bool {
        if index > self.num_lines() {
            return false;
        }
        self.lines.insert(index, Line::new(content));
        true
    }

    pub fn delete_line(&mut self, index: usize) -> bool {
        if index >= self.num_lines() {
            return false;
        }
        self.lines.remove(index);
        self.is_dirty = true;
        true
    }

    /// A `col` past the end of the line is clamped to the line length. When
    /// `row == num_lines` an empty line is appended first.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: u8) -> bool {
        if row == self.num_lines() {
            self.insert_line(row, Vec::new());
        }
        let Some(line) = self.lines.get_mut(row) else {
            return false;
        };
        let col = col.min(line.len());
        line.update_content(|content| content.insert(col, ch));
        self.is_dirty = true;
        true
    }

    pub fn delete_char(&mut self, row: usize, col: usize) -> bool {
        let Some(line) = self.lines.get_mut(row) else {
            return false;
        };
        if col >= line.len() {
            return false;
        }
        line.update_content(|content| {
            content.remove(col);
        });
        self.is_dirty = true;
        true
    }

    /// Appends line `row + 1` onto line `row`, and removes line `row + 1`.
    pub fn join_with_next(&mut self, row: usize) -> bool {
        if row + 1 >= self.num_lines() {
            return false;
        }
        let next = self.lines.remove(row + 1);
        self.lines[row].update_content(|content| content.extend_from_slice(&next.content));
        self.is_dirty = true;
        true
    }

    /// Moves `content[col..]` of line `row` into a new line right below it. A `col` past
    /// the end of the line is clamped to the line length. When `row == num_lines` an
    /// empty line is inserted.
    pub fn split(&mut self, row: usize, col: usize) -> bool {
        if row == self.num_lines() {
            self.insert_line(row, Vec::new());
            self.is_dirty = true;
            return true;
        }
        let Some(line) = self.lines.get_mut(row) else {
            return false;
        };
        let col = col.min(line.len());
        let mut tail = Vec::new();
        line.update_content(|content| tail = content.split_off(col));
        self.lines.insert(row + 1, Line::new(tail));
        self.is_dirty = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn contents(document: &Document) -> Vec<String> {
        document
            .lines()
            .iter()
            .map(|it| String::from_utf8_lossy(it.content()).into_owned())
            .collect()
    }

    #[test]
    fn test_from_lines_is_clean_with_render() {
        let document = Document::from_lines([b"a\tb".to_vec(), b"c".to_vec()]);
        assert!(!document.is_dirty());
        assert_eq!(document.num_lines(), 2);
        assert_eq!(document.line(0).unwrap().render(), b"a   b");
        assert_eq!(document.line_len(1), 1);
        assert_eq!(document.line_len(2), 0);
    }

    #[test]
    fn test_insert_line_bounds_and_not_dirty() {
        let mut document = Document::default();
        assert!(document.insert_line(0, b"b".to_vec()));
        assert!(document.insert_line(0, b"a".to_vec()));
        assert!(document.insert_line(2, b"c".to_vec()));
        assert!(!document.insert_line(4, b"x".to_vec()));
        assert_eq!(contents(&document), vec!["a", "b", "c"]);
        assert!(!document.is_dirty());
    }

    #[test]
    fn test_delete_line() {
        let mut document = Document::from_lines([b"a".to_vec(), b"b".to_vec()]);
        assert!(!document.delete_line(2));
        assert!(!document.is_dirty());
        assert!(document.delete_line(0));
        assert_eq!(contents(&document), vec!["b"]);
        assert!(document.is_dirty());
    }

    #[test]
    fn test_insert_char_appends_line_at_end_and_clamps_col() {
        let mut document = Document::default();
        assert!(document.insert_char(0, 0, b'a'));
        assert!(document.insert_char(0, 99, b'\t'));
        assert_eq!(contents(&document), vec!["a\t"]);
        assert_eq!(document.line(0).unwrap().render(), b"a   ");
        assert!(document.is_dirty());

        // Two past the end is out of range.
        assert!(!document.insert_char(2, 0, b'x'));
        assert_eq!(document.num_lines(), 1);
    }

    #[test]
    fn test_delete_char() {
        let mut document = Document::from_lines([b"hello".to_vec()]);
        assert!(!document.delete_char(0, 5));
        assert!(!document.delete_char(1, 0));
        assert!(!document.is_dirty());

        assert!(document.delete_char(0, 4));
        assert_eq!(contents(&document), vec!["hell"]);
        assert!(document.is_dirty());
    }

    #[test]
    fn test_join_with_next() {
        let mut document = Document::from_lines([b"foo".to_vec(), b"\tbar".to_vec()]);
        assert!(!document.join_with_next(1));
        assert!(document.join_with_next(0));
        assert_eq!(contents(&document), vec!["foo\tbar"]);
        assert_eq!(document.line(0).unwrap().render(), b"foo bar");
    }

    #[test]
    fn test_split_then_join_restores_line() {
        let original = b"ab\tcd ef".to_vec();
        for col in 0..=original.len() {
            let mut document = Document::from_lines([original.clone()]);
            assert!(document.split(0, col));
            assert_eq!(document.num_lines(), 2);
            assert_eq!(document.line(0).unwrap().content(), &original[..col]);
            assert_eq!(document.line(1).unwrap().content(), &original[col..]);

            assert!(document.join_with_next(0));
            let expected = String::from_utf8_lossy(&original).into_owned();
            assert_eq!(contents(&document), vec![expected]);
            assert_eq!(document.line(0).unwrap().render(), compute_render(&original));
        }
    }

    #[test]
    fn test_split_past_the_end_row_adds_empty_line() {
        let mut document = Document::from_lines([b"a".to_vec()]);
        assert!(document.split(1, 0));
        assert_eq!(contents(&document), vec!["a", ""]);
        assert!(document.is_dirty());
        assert!(!document.split(3, 0));
    }

    #[test]
    fn test_to_bytes_and_mark_clean() {
        let mut document = Document::new_with_one_empty_line();
        document.insert_char(0, 0, b'a');
        document.split(0, 1);
        document.insert_char(1, 0, b'b');
        document.insert_char(1, 0, b'b');
        assert_eq!(document.to_bytes(), b"a\nbb\n".to_vec());

        document.mark_clean();
        assert!(!document.is_dirty());
    }
}
