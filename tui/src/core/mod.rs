// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Ambient concerns of the editor that have nothing to do with editing text:
//!
//! 1. Results and errors, built on [`miette`] and [`thiserror`].
//! 2. Logging to a file with [`tracing`], so nothing is ever printed over the editor's
//!    screen.
//! 3. The capabilities that the editor engine needs from the outside world,
//!    [`TerminalIo`] and [`DocumentStorage`], along with their real implementations.
//! 4. Test fixtures: scripted terminal and storage doubles, and self deleting temp
//!    dirs.

// Connect to source file.
pub mod common;
pub mod log;
pub mod misc;
pub mod storage;
pub mod terminal_io;
pub mod test_fixtures;

// Re-export.
pub use common::*;
pub use log::*;
pub use misc::*;
pub use storage::*;
pub use terminal_io::*;
pub use test_fixtures::*;
