// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crossterm::event::Event;

use crate::{CommonResult, Size};

/// The narrow interface that the editor uses to talk to a character cell terminal.
///
/// Raw mode and the alternate screen are not part of it: they are entered and left
/// around the main event loop by [`crate::RawMode`], so that the editor engine can run
/// against a [`crate::TerminalMock`] in tests without touching the real TTY.
pub trait TerminalIo {
    /// Current terminal dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditorErrorCouldNot::LookupTerminalSize`] if the size can't be
    /// determined, or if either dimension is zero.
    fn lookup_size(&mut self) -> CommonResult<Size>;

    /// Waits up to `timeout` for the next raw input event. `Ok(None)` means the timeout
    /// elapsed with nothing to read.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditorErrorCouldNot::ReadInputEvent`] if the input stream is
    /// broken. This is fatal.
    fn poll_event(&mut self, timeout: Duration) -> CommonResult<Option<Event>>;

    /// Writes one fully composed frame in a single write, then flushes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditorErrorCouldNot::WriteFrame`] if the bytes can't be written.
    fn write_frame(&mut self, frame: &[u8]) -> CommonResult<()>;
}
