// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::stdout;

use crossterm::{cursor::MoveTo,
                execute,
                terminal::{self, Clear, ClearType, EnterAlternateScreen,
                           LeaveAlternateScreen}};

use crate::{CommonResult, DEBUG_KILO_SHOW_TERMINAL_BACKEND, EditorErrorCouldNot};

/// Guard for raw mode and the alternate screen. Call [`RawMode::end`] to restore the
/// terminal and find out if that worked. If the guard is dropped without that (eg: on an
/// early return), restoring is still attempted and any failure is only logged.
#[derive(Debug)]
pub struct RawMode {
    is_active: bool,
}

impl RawMode {
    /// # Errors
    ///
    /// Returns [`EditorErrorCouldNot::EnterRawMode`] if raw mode or the alternate screen
    /// can't be entered.
    pub fn start() -> CommonResult<Self> {
        DEBUG_KILO_SHOW_TERMINAL_BACKEND.then(|| {
            tracing::debug!(message = "RawMode::start -> 🟢 enabling raw mode");
        });

        terminal::enable_raw_mode().map_err(|err| {
            tracing::error!(message = "RawMode::start -> ❌ raw mode failed", error = %err);
            EditorErrorCouldNot::EnterRawMode
        })?;

        // From here on, dropping the guard undoes the raw mode that was just entered.
        let guard = Self { is_active: true };

        execute!(stdout(), EnterAlternateScreen).map_err(|err| {
            tracing::error!(
                message = "RawMode::start -> ❌ alternate screen failed",
                error = %err
            );
            EditorErrorCouldNot::EnterRawMode
        })?;

        Ok(guard)
    }

    /// Clears the screen, leaves the alternate screen, and disables raw mode.
    ///
    /// # Errors
    ///
    /// Returns [`EditorErrorCouldNot::RestoreTerminal`] if any of those steps fail.
    pub fn end(mut self) -> CommonResult<()> {
        self.is_active = false;
        restore_terminal()
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if self.is_active {
            self.is_active = false;
            if let Err(report) = restore_terminal() {
                tracing::error!(message = "RawMode::drop", error = %report);
            }
        }
    }
}

fn restore_terminal() -> CommonResult<()> {
    DEBUG_KILO_SHOW_TERMINAL_BACKEND.then(|| {
        tracing::debug!(message = "RawMode::end -> 🔴 disabling raw mode");
    });

    let screen_result = execute!(
        stdout(),
        Clear(ClearType::All),
        MoveTo(0, 0),
        LeaveAlternateScreen
    );

    // Raw mode is disabled even if the screen could not be restored.
    let raw_mode_result = terminal::disable_raw_mode();

    match (screen_result, raw_mode_result) {
        (Ok(()), Ok(())) => Ok(()),
        (Err(err), _) | (_, Err(err)) => {
            tracing::error!(message = "RawMode::end -> ❌ failed", error = %err);
            Err(EditorErrorCouldNot::RestoreTerminal.into())
        }
    }
}
