// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod editor;
pub mod global_constants;
pub mod terminal_window;

// Re-export.
pub use editor::*;
pub use global_constants::*;
pub use terminal_window::*;
