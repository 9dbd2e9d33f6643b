// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Builds one frame of output, and writes it to the terminal in a single write.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │text row (render form, scrolled)   ESC[K  │ ← viewport rows
//! │~                                  ESC[K  │
//! │[ inverse ] notes.txt*   Line: 1/1, Col 0/4│ ← info bar
//! │status message (for 5 seconds)     ESC[K  │ ← status bar
//! └──────────────────────────────────────────┘
//! ```
//!
//! The caret is hidden while the frame is drawn, and shown again once it has been
//! moved to its final position.

use std::time::Instant;

use crossterm::{cursor::{Hide, MoveTo, Show},
                queue,
                style::{Attribute, SetAttribute},
                terminal::{Clear, ClearType}};
use miette::IntoDiagnostic;

use crate::{CommonResult, EditorGlyph, EditorSession, TerminalIo, ok,
            truncate_to_byte_len, ui_str};

const LINE_BREAK: &[u8] = b"\r\n";

/// Scrolls the viewport so the caret is visible, composes a frame, and writes it.
///
/// # Errors
///
/// Returns an error if the frame can't be written to the terminal.
pub fn render_frame(
    session: &mut EditorSession,
    terminal: &mut dyn TerminalIo,
) -> CommonResult<()> {
    session
        .viewport
        .recompute_scroll(&mut session.cursor, &session.document);
    let frame = compose_frame(session, Instant::now())?;
    terminal.write_frame(&frame)
}

/// Expects [`crate::Viewport::recompute_scroll`] to have been called already. The
/// returned buffer is only ever appended to.
///
/// # Errors
///
/// Returns an error if an escape sequence can't be queued into the buffer.
pub fn compose_frame(session: &EditorSession, now: Instant) -> CommonResult<Vec<u8>> {
    let mut acc: Vec<u8> = Vec::new();

    queue!(acc, Hide, MoveTo(0, 0)).into_diagnostic()?;
    compose_text_rows(session, &mut acc)?;
    compose_info_bar(session, &mut acc)?;
    compose_status_bar(session, now, &mut acc)?;

    let viewport = &session.viewport;
    let cursor = &session.cursor;
    let caret_row = cursor.logical_row.saturating_sub(viewport.row_offset);
    let caret_col = cursor.render_col.saturating_sub(viewport.col_offset);
    queue!(acc, MoveTo(to_u16(caret_col), to_u16(caret_row)), Show).into_diagnostic()?;

    Ok(acc)
}

fn compose_text_rows(session: &EditorSession, acc: &mut Vec<u8>) -> CommonResult<()> {
    let viewport = &session.viewport;
    let col_count = viewport.size.col_count;

    for screen_row in 0..viewport.size.row_count {
        match session.document.line(viewport.row_offset + screen_row) {
            None => acc.extend_from_slice(EditorGlyph::Filler.as_ref().as_bytes()),
            Some(line) => {
                let render = line.render();
                let start = viewport.col_offset.min(render.len());
                let end = (viewport.col_offset + col_count).min(render.len());
                acc.extend_from_slice(&render[start..end]);
            }
        }
        queue!(acc, Clear(ClearType::UntilNewLine)).into_diagnostic()?;
        acc.extend_from_slice(LINE_BREAK);
    }

    ok!()
}

/// Filename on the left, caret position on the right, in inverse video, clipped to the
/// width of the window.
fn compose_info_bar(session: &EditorSession, acc: &mut Vec<u8>) -> CommonResult<()> {
    let col_count = session.viewport.size.col_count;
    let row = session.cursor.logical_row;

    let left = ui_str::info_bar_filename(
        session.filename_for_display().as_deref(),
        session.document.is_dirty(),
    );
    let right = ui_str::info_bar_position(
        row,
        session.document.num_lines(),
        session.cursor.logical_col,
        session.document.line_len(row),
    );

    let left_width = col_count.saturating_sub(right.len()).max(left.len());
    let mut bar = format!("{left:<left_width$}{right}");
    truncate_to_byte_len(&mut bar, col_count);

    queue!(acc, SetAttribute(Attribute::Reverse)).into_diagnostic()?;
    acc.extend_from_slice(bar.as_bytes());
    queue!(acc, SetAttribute(Attribute::Reset)).into_diagnostic()?;
    acc.extend_from_slice(LINE_BREAK);

    ok!()
}

fn compose_status_bar(
    session: &EditorSession,
    now: Instant,
    acc: &mut Vec<u8>,
) -> CommonResult<()> {
    queue!(acc, Clear(ClearType::UntilNewLine)).into_diagnostic()?;
    if let Some(text) = session.status_message.visible_text(now) {
        let mut text = text.to_string();
        truncate_to_byte_len(&mut text, session.viewport.size.col_count);
        acc.extend_from_slice(text.as_bytes());
    }
    ok!()
}

fn to_u16(value: usize) -> u16 { u16::try_from(value).unwrap_or(u16::MAX) }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Document, TerminalMock, size};
    use pretty_assertions::assert_eq;
    use std::{path::PathBuf, time::Duration};

    fn session(lines: &[&str], cols: usize, rows: usize) -> EditorSession {
        EditorSession::new(
            Document::from_lines(lines.iter().map(|it| it.as_bytes().to_vec())),
            None,
            size!(col_count: cols, row_count: rows),
            Instant::now(),
        )
    }

    fn frame_lines(session: &mut EditorSession) -> Vec<String> {
        let mut terminal = TerminalMock::default();
        render_frame(session, &mut terminal).unwrap();
        assert_eq!(terminal.frames.len(), 1);
        terminal.last_frame_lines()
    }

    #[test]
    fn test_text_rows_filler_and_bars() {
        let mut session = session(&["hello", "\tworld"], 30, 6);
        let lines = frame_lines(&mut session);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "hello");
        assert_eq!(lines[1], "    world");
        assert_eq!(lines[2], "~");
        assert_eq!(lines[3], "~");
        assert_eq!(lines[4], "[Untitled]  Line: 1/2, Col 0/5");
        assert!(lines[5].starts_with("CTRL-Q To Quit"));
        assert!(lines[5].len() <= 30);
    }

    #[test]
    fn test_info_bar_shows_dirty_filename_and_is_clipped() {
        let mut session = session(&["abc"], 12, 4);
        session.maybe_filename = Some(PathBuf::from("notes.txt"));
        session.document.insert_char(0, 0, b'x');
        let lines = frame_lines(&mut session);
        assert_eq!(lines[2], "notes.txt*Li");
    }

    #[test]
    fn test_horizontal_scroll_slices_render() {
        let mut session = session(&["0123456789abcdef"], 5, 3);
        session.cursor.logical_col = 12;
        let lines = frame_lines(&mut session);
        assert_eq!(session.viewport.col_offset, 8);
        assert_eq!(lines[0], "89abc");
    }

    #[test]
    fn test_expired_status_message_is_blank() {
        let mut session = session(&["a"], 20, 3);
        session
            .viewport
            .recompute_scroll(&mut session.cursor, &session.document);
        let later = Instant::now() + Duration::from_secs(6);
        let frame = compose_frame(&session, later).unwrap();
        let text = String::from_utf8_lossy(&strip_ansi_escapes::strip(&frame)).into_owned();
        assert_eq!(text.rsplit('\n').next(), Some(""));
    }

    #[test]
    fn test_escape_sequences_and_caret_position() {
        let mut session = session(&["ab\tc", "d"], 20, 5);
        session.cursor.logical_col = 3;
        session
            .viewport
            .recompute_scroll(&mut session.cursor, &session.document);
        let frame = compose_frame(&session, Instant::now()).unwrap();
        let frame = String::from_utf8_lossy(&frame).into_owned();

        assert!(frame.starts_with("\x1b[?25l\x1b[1;1H"));
        assert!(frame.contains("ab  c\x1b[K\r\n"));
        assert!(frame.contains("\x1b[7m"));
        assert!(frame.contains("\x1b[0m\r\n"));
        // Tab expands "ab\t" to render col 4, so the caret is on screen column 5.
        assert!(frame.ends_with("\x1b[1;5H\x1b[?25h"));
    }

    #[test]
    fn test_zero_row_viewport_still_draws_bars() {
        let mut session = session(&["a"], 20, 2);
        let lines = frame_lines(&mut session);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[Untitled]"));
    }
}
