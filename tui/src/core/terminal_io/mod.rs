// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Private modules (hide internal structure).
mod crossterm_terminal;
mod size;
mod terminal_io_api;

// Re-exports for flat public API.
pub use crossterm_terminal::*;
pub use size::*;
pub use terminal_io_api::*;
