// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # kilo_tui
//!
//! The engine behind the `kilo` terminal text editor. It edits one document at a time,
//! held in memory as a list of lines, and draws it with plain ANSI escape sequences.
//!
//! # Layout
//!
//! - [`core`]: results and errors ([`miette`] + [`thiserror`]), file logging
//!   ([`tracing`]), the [`TerminalIo`] and [`DocumentStorage`] capabilities, and the
//!   test fixtures ([`TerminalMock`], [`StorageMock`], [`TempDir`]).
//! - [`tui::editor`]: the editing engine. The document ([`Document`]) and its tab
//!   expanded render form, the caret and the scrolling [`Viewport`], the single write
//!   frame composer, the key decoder, the filename prompt, and the edit dispatcher with
//!   its confirm to quit state machine ([`QuitConfirmation`]).
//! - [`tui::terminal_window`]: the [`RawMode`] guard and the main event loop
//!   ([`run_editor`]).
//!
//! # Flow
//!
//! ```text
//! run_main_event_loop
//!   └─▶ render_frame ──▶ read_key ──▶ dispatch_key ─┐
//!          ▲                                         │
//!          └─────────────────────────────────────────┘
//!                                   save_document ──▶ prompt (its own render/read loop)
//! ```
//!
//! Everything runs on one thread, and blocks on the next input event. Resize events are
//! picked up by polling with a short timeout, and never count as a key press.
//!
//! # Logging
//!
//! Logging is off unless `KILO_LOG_LEVEL` is set, and it only ever goes to a file
//! (`KILO_LOG_FILE`, `kilo_log.txt` by default), since the editor owns the screen.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod core;
pub mod tui;

// Re-export.
pub use core::*;
pub use tui::*;
