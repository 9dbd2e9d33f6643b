// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use strum_macros::{AsRefStr, EnumIter};

/// A tab advances the render column to the next multiple of this.
pub const TAB_WIDTH: usize = 4;

/// Number of extra `Ctrl-Q` presses it takes to quit with unsaved changes.
pub const QUIT_CONFIRMATIONS: u8 = 2;

/// How long a status message stays visible after it is set.
pub const STATUS_MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Input is polled with this timeout so resize events are picked up promptly.
pub const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

pub const FILENAME_DISPLAY_MAX_LEN: usize = 20;

/// The file info bar and the status bar.
pub const BOTTOM_BAR_ROW_COUNT: usize = 2;

// Enable or disable debug logging of raw mode and alternate screen transitions.
pub const DEBUG_KILO_SHOW_TERMINAL_BACKEND: bool = false;

#[derive(Clone, Copy, Debug, Eq, PartialEq, AsRefStr, EnumIter)]
pub enum EditorGlyph {
    /// Drawn on rows past the end of the document.
    #[strum(to_string = "~")]
    Filler,

    /// Shown in the info bar in place of a missing filename.
    #[strum(to_string = "[Untitled]")]
    Untitled,

    /// Appended to the filename in the info bar when there are unsaved changes.
    #[strum(to_string = "*")]
    DirtyMarker,
}
