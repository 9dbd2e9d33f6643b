// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{path::PathBuf, time::Instant};

use crate::{BOTTOM_BAR_ROW_COUNT, Cursor, Document, QuitConfirmation, Size,
            StatusMessage, Viewport, ui_str};

/// All the state of one editing session. It is created at startup, and handed by
/// `&mut` to whatever needs to read or change it. There is exactly one owner, and
/// exactly one thread that touches it.
#[derive(Debug)]
pub struct EditorSession {
    pub document: Document,
    pub cursor: Cursor,
    pub viewport: Viewport,
    pub maybe_filename: Option<PathBuf>,
    pub status_message: StatusMessage,
    pub quit_confirmation: QuitConfirmation,
}

impl EditorSession {
    /// `terminal_size` is the whole window. The two bottom bars are taken off it to get
    /// the size of the document area.
    #[must_use]
    pub fn new(
        document: Document,
        maybe_filename: Option<PathBuf>,
        terminal_size: Size,
        now: Instant,
    ) -> Self {
        Self {
            document,
            cursor: Cursor::default(),
            viewport: Viewport::new(terminal_size.sub_rows(BOTTOM_BAR_ROW_COUNT)),
            maybe_filename,
            status_message: StatusMessage::new(ui_str::initial_help_msg(), now),
            quit_confirmation: QuitConfirmation::default(),
        }
    }

    pub fn set_terminal_size(&mut self, terminal_size: Size) {
        self.viewport.size = terminal_size.sub_rows(BOTTOM_BAR_ROW_COUNT);
    }

    pub fn set_status_message(&mut self, text: impl Into<String>) {
        self.status_message.set(text, Instant::now());
    }

    pub fn clear_status_message(&mut self) { self.status_message.clear(Instant::now()); }

    #[must_use]
    pub fn filename_for_display(&self) -> Option<String> {
        self.maybe_filename
            .as_ref()
            .map(|it| it.to_string_lossy().into_owned())
    }
}
