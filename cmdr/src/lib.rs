// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The `kilo` binary's library half: command line parsing, and the launcher that sets up
//! error reporting and logging before handing the terminal over to [`kilo_tui`].

// Attach sources.
pub mod kilo;

// Re-export.
pub use kilo::*;
