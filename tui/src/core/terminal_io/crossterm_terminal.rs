// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::Write, time::Duration};

use crossterm::event::{self, Event};

use crate::{CommonResult, EditorErrorCouldNot, Size, TerminalIo, ok};

/// [`TerminalIo`] backed by crossterm and the process's stdout.
#[derive(Debug)]
pub struct CrosstermTerminal {
    pub stdout: std::io::Stdout,
}

impl Default for CrosstermTerminal {
    fn default() -> Self { Self::new() }
}

impl CrosstermTerminal {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdout: std::io::stdout(),
        }
    }
}

impl TerminalIo for CrosstermTerminal {
    fn lookup_size(&mut self) -> CommonResult<Size> {
        let (columns, rows) = crossterm::terminal::size().map_err(|err| {
            tracing::error!(message = "lookup_size", error = ?err);
            EditorErrorCouldNot::LookupTerminalSize
        })?;

        if columns == 0 || rows == 0 {
            return Err(EditorErrorCouldNot::LookupTerminalSize.into());
        }

        Ok(Size::from_crossterm(columns, rows))
    }

    fn poll_event(&mut self, timeout: Duration) -> CommonResult<Option<Event>> {
        let is_ready = event::poll(timeout).map_err(|err| {
            tracing::error!(message = "poll_event -> poll", error = ?err);
            EditorErrorCouldNot::ReadInputEvent
        })?;

        if !is_ready {
            return Ok(None);
        }

        let event = event::read().map_err(|err| {
            tracing::error!(message = "poll_event -> read", error = ?err);
            EditorErrorCouldNot::ReadInputEvent
        })?;

        Ok(Some(event))
    }

    fn write_frame(&mut self, frame: &[u8]) -> CommonResult<()> {
        let mut locked = self.stdout.lock();
        locked
            .write_all(frame)
            .and_then(|()| locked.flush())
            .map_err(|err| {
                tracing::error!(message = "write_frame", error = ?err);
                EditorErrorCouldNot::WriteFrame
            })?;
        ok!()
    }
}
