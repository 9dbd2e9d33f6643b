// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{path::PathBuf, time::Instant};

use crate::{CommonResult, CrosstermTerminal, DispatchOutcome, Document,
            DocumentStorage, EditorArgsMut, EditorSession, LocalFileStorage, RawMode,
            TerminalIo, dispatch_key, ok, read_key, render_frame};

/// Runs the editor in the real terminal, on the file at `maybe_path` if given.
///
/// The terminal size is looked up and the file is loaded before the screen is taken
/// over, so failures there are reported on a normal terminal. Once raw mode is entered,
/// the terminal is restored before any error from the main loop is passed on.
///
/// # Errors
///
/// Returns any fatal [`crate::EditorErrorCouldNot`].
pub fn run_editor(maybe_path: Option<PathBuf>) -> CommonResult<()> {
    let mut terminal = CrosstermTerminal::new();
    let storage = LocalFileStorage;

    let mut session = open_editor_session(maybe_path, &mut terminal, &storage)?;

    let raw_mode = RawMode::start()?;
    let loop_result = run_main_event_loop(&mut session, &mut terminal, &storage);
    let restore_result = raw_mode.end();

    if let Err(ref report) = loop_result {
        tracing::error!(message = "run_editor -> main loop failed", error = %report);
    }

    loop_result?;
    restore_result
}

/// Looks up the terminal size, then loads the file (if there is one) into a new
/// session. Without a file the document starts out as one empty line.
///
/// # Errors
///
/// Returns an error if the size can't be looked up, or the file can't be read.
pub fn open_editor_session(
    maybe_path: Option<PathBuf>,
    terminal: &mut dyn TerminalIo,
    storage: &dyn DocumentStorage,
) -> CommonResult<EditorSession> {
    let terminal_size = terminal.lookup_size()?;

    let document = match &maybe_path {
        Some(path) => {
            let lines = storage.read_lines(path)?;
            tracing::info!(message = "open -> loaded", path = ?path, num_lines = lines.len());
            Document::from_lines(lines)
        }
        None => Document::new_with_one_empty_line(),
    };

    tracing::info!(
        message = "open -> startup 🚀",
        maybe_path = ?maybe_path,
        size = ?terminal_size
    );

    Ok(EditorSession::new(
        document,
        maybe_path,
        terminal_size,
        Instant::now(),
    ))
}

/// Render, read a key, dispatch it. Repeat until the quit key is accepted.
///
/// # Errors
///
/// Returns an error if input can't be read, or a frame can't be written.
pub fn run_main_event_loop(
    session: &mut EditorSession,
    terminal: &mut dyn TerminalIo,
    storage: &dyn DocumentStorage,
) -> CommonResult<()> {
    loop {
        render_frame(session, terminal)?;
        let key = read_key(session, terminal)?;

        let mut args = EditorArgsMut {
            session: &mut *session,
            terminal: &mut *terminal,
            storage,
        };
        if dispatch_key(&mut args, key)? == DispatchOutcome::Exit {
            break;
        }
    }

    ok!()
}
