// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod main_event_loop;
pub mod raw_mode;

// Re-export.
pub use main_event_loop::*;
pub use raw_mode::*;
