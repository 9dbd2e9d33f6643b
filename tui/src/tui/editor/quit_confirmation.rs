// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::QUIT_CONFIRMATIONS;

/// Confirm-to-quit state machine. Quitting a clean document is immediate. Quitting a
/// dirty one takes [`QUIT_CONFIRMATIONS`] extra presses of the quit key in a row. Any
/// other key starts the count over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuitConfirmation {
    remaining: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuitDecision {
    Exit,
    /// Stay open. `remaining` is the number of presses left, before this one was
    /// counted.
    Warn { remaining: u8 },
}

impl Default for QuitConfirmation {
    fn default() -> Self {
        Self {
            remaining: QUIT_CONFIRMATIONS,
        }
    }
}

impl QuitConfirmation {
    #[must_use]
    pub fn remaining(&self) -> u8 { self.remaining }

    pub fn on_quit_key(&mut self, is_dirty: bool) -> QuitDecision {
        if !is_dirty || self.remaining == 0 {
            return QuitDecision::Exit;
        }
        let remaining = self.remaining;
        self.remaining -= 1;
        QuitDecision::Warn { remaining }
    }

    pub fn reset(&mut self) { self.remaining = QUIT_CONFIRMATIONS; }
}
