// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Applies one [`EditorEvent`] to the session. Everything except the quit key starts
//! the quit confirmation count over.

use crate::{CaretDirection, CommonResult, DocumentStorage, EditorEvent, EditorSession,
            Key, QuitDecision, TerminalIo, move_caret, move_caret_by,
            move_caret_to_line_end, move_caret_to_line_start, ok, save_document, ui_str};

/// Everything an editor event may need: the session to change, the terminal (for the
/// filename prompt), and storage (for saving).
#[allow(missing_debug_implementations)]
pub struct EditorArgsMut<'a> {
    pub session: &'a mut EditorSession,
    pub terminal: &'a mut dyn TerminalIo,
    pub storage: &'a dyn DocumentStorage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    Continue,
    Exit,
}

/// # Errors
///
/// Only fatal terminal errors, from the filename prompt during a save.
pub fn dispatch_key(args: &mut EditorArgsMut<'_>, key: Key) -> CommonResult<DispatchOutcome> {
    apply_editor_event(args, EditorEvent::from(key))
}

/// # Errors
///
/// Only fatal terminal errors, from the filename prompt during a save.
pub fn apply_editor_event(
    args: &mut EditorArgsMut<'_>,
    event: EditorEvent,
) -> CommonResult<DispatchOutcome> {
    if event != EditorEvent::Quit {
        args.session.quit_confirmation.reset();
    }

    let session = &mut *args.session;
    let page_height = session.viewport.size.row_count;

    match event {
        EditorEvent::Quit => {
            let is_dirty = session.document.is_dirty();
            match session.quit_confirmation.on_quit_key(is_dirty) {
                QuitDecision::Exit => {
                    tracing::info!(message = "quit", is_dirty);
                    return ok!(DispatchOutcome::Exit);
                }
                QuitDecision::Warn { remaining } => {
                    tracing::debug!(message = "quit -> needs confirmation", remaining);
                    session.set_status_message(ui_str::quit_warning_msg(remaining));
                }
            }
        }
        EditorEvent::Save => save_document(args)?,
        EditorEvent::InsertChar(byte) => {
            let cursor = &mut session.cursor;
            if session
                .document
                .insert_char(cursor.logical_row, cursor.logical_col, byte)
            {
                cursor.logical_col += 1;
            }
        }
        EditorEvent::InsertNewLine => {
            let cursor = &mut session.cursor;
            if session.document.split(cursor.logical_row, cursor.logical_col) {
                cursor.logical_row += 1;
                cursor.logical_col = 0;
            }
        }
        EditorEvent::Backspace => backspace(session),
        EditorEvent::Delete => {
            // Delete only when the column changed. Moving down onto the next row from
            // an empty line deletes nothing.
            let col_before = session.cursor.logical_col;
            move_caret(&mut session.cursor, &session.document, CaretDirection::Right);
            if session.cursor.logical_col != col_before {
                backspace(session);
            }
        }
        EditorEvent::Home => {
            move_caret_to_line_start(&mut session.cursor);
        }
        EditorEvent::End => {
            move_caret_to_line_end(&mut session.cursor, &session.document);
        }
        EditorEvent::PageUp => {
            move_caret_by(
                &mut session.cursor,
                &session.document,
                CaretDirection::Up,
                page_height,
            );
        }
        EditorEvent::PageDown => {
            move_caret_by(
                &mut session.cursor,
                &session.document,
                CaretDirection::Down,
                page_height,
            );
        }
        EditorEvent::MoveCaret(direction) => {
            move_caret(&mut session.cursor, &session.document, direction);
        }
        EditorEvent::Noop => {}
    }

    ok!(DispatchOutcome::Continue)
}

/// Deletes the byte left of the caret. At column 0 the line is joined onto the one
/// above it. Does nothing at the very start of the document.
fn backspace(session: &mut EditorSession) {
    let cursor = &mut session.cursor;
    let document = &mut session.document;
    let (row, col) = (cursor.logical_row, cursor.logical_col);

    if col > 0 {
        if document.delete_char(row, col - 1) {
            cursor.logical_col -= 1;
        }
        return;
    }

    if row == 0 {
        return;
    }

    let previous_line_len = document.line_len(row - 1);
    // On the past the end row there is no line to join, just move up.
    if row < document.num_lines() {
        document.join_with_next(row - 1);
    }
    cursor.logical_row = row - 1;
    cursor.logical_col = previous_line_len;
}
