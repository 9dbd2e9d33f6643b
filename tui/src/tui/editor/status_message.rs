// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Instant;

use crate::STATUS_MESSAGE_TIMEOUT;

/// The transient message in the bottom row. It is only drawn for
/// [`STATUS_MESSAGE_TIMEOUT`] after it was set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub set_at: Instant,
}

impl StatusMessage {
    #[must_use]
    pub fn new(text: impl Into<String>, now: Instant) -> Self {
        Self {
            text: text.into(),
            set_at: now,
        }
    }

    pub fn set(&mut self, text: impl Into<String>, now: Instant) {
        self.text = text.into();
        self.set_at = now;
    }

    pub fn clear(&mut self, now: Instant) { self.set(String::new(), now); }

    /// `None` once the message has expired, or if it is empty.
    #[must_use]
    pub fn visible_text(&self, now: Instant) -> Option<&str> {
        let is_fresh = now.saturating_duration_since(self.set_at) < STATUS_MESSAGE_TIMEOUT;
        (is_fresh && !self.text.is_empty()).then_some(self.text.as_str())
    }
}
