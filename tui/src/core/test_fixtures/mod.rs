// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod storage_mock;
pub mod temp_dir;
pub mod terminal_mock;

// Re-export.
pub use storage_mock::*;
pub use temp_dir::*;
pub use terminal_mock::*;
