// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque, time::Duration};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{CommonResult, EditorErrorCouldNot, Size, TerminalIo};

/// Scripted [`TerminalIo`]. Events are handed out in order (`None` entries are poll
/// timeouts), every written frame is captured, and a resize event updates the size that
/// [`TerminalIo::lookup_size`] reports, just like a real terminal would.
///
/// Running out of scripted events is reported as a broken input stream, so a test that
/// forgets to quit fails instead of hanging.
#[derive(Debug, Default)]
pub struct TerminalMock {
    pub size: Size,
    pub events: VecDeque<Option<Event>>,
    pub frames: Vec<Vec<u8>>,
    pub is_size_lookup_broken: bool,
}

impl TerminalMock {
    #[must_use]
    pub fn new(size: Size, events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            size,
            events: events.into_iter().map(Some).collect(),
            ..Default::default()
        }
    }

    pub fn push_events(&mut self, events: impl IntoIterator<Item = Event>) {
        self.events.extend(events.into_iter().map(Some));
    }

    pub fn push_timeout(&mut self) { self.events.push_back(None); }

    /// The most recent frame with all escape sequences removed. Rows are separated by
    /// `\n`.
    #[must_use]
    pub fn last_frame_as_string_strip_ansi(&self) -> String {
        self.frames
            .last()
            .map(|frame| {
                String::from_utf8_lossy(&strip_ansi_escapes::strip(frame)).into_owned()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn last_frame_lines(&self) -> Vec<String> {
        self.last_frame_as_string_strip_ansi()
            .split('\n')
            .map(|it| it.trim_end_matches('\r').to_string())
            .collect()
    }
}

impl TerminalIo for TerminalMock {
    fn lookup_size(&mut self) -> CommonResult<Size> {
        if self.is_size_lookup_broken
            || self.size.col_count == 0
            || self.size.row_count == 0
        {
            return Err(EditorErrorCouldNot::LookupTerminalSize.into());
        }
        Ok(self.size)
    }

    fn poll_event(&mut self, _timeout: Duration) -> CommonResult<Option<Event>> {
        let Some(maybe_event) = self.events.pop_front() else {
            return Err(EditorErrorCouldNot::ReadInputEvent.into());
        };
        if let Some(Event::Resize(columns, rows)) = maybe_event {
            self.size = Size::from_crossterm(columns, rows);
        }
        Ok(maybe_event)
    }

    fn write_frame(&mut self, frame: &[u8]) -> CommonResult<()> {
        self.frames.push(frame.to_vec());
        Ok(())
    }
}

/// A key press with no modifiers.
#[must_use]
pub fn key_press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new_with_kind(
        code,
        KeyModifiers::NONE,
        KeyEventKind::Press,
    ))
}

/// Ctrl + `ch`, eg: `ctrl_key('q')`.
#[must_use]
pub fn ctrl_key(ch: char) -> Event {
    Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char(ch),
        KeyModifiers::CONTROL,
        KeyEventKind::Press,
    ))
}

/// One key press per char of `text`.
#[must_use]
pub fn type_text(text: &str) -> Vec<Event> {
    text.chars().map(|ch| key_press(KeyCode::Char(ch))).collect()
}
