// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The editing engine. Leaves first: [`line_store`] and [`render_cache`] hold the text,
//! [`viewport`] and [`caret_mut`] keep the caret in view, [`frame_composer`] draws,
//! [`key_decoder`] reads input, and [`edit_dispatcher`] ties them together.

// Attach sources.
pub mod caret_mut;
pub mod edit_dispatcher;
pub mod editor_event;
pub mod frame_composer;
pub mod key_decoder;
pub mod line_store;
pub mod prompt;
pub mod quit_confirmation;
pub mod render_cache;
pub mod save;
pub mod session;
pub mod status_message;
pub mod ui_str;
pub mod viewport;

// Re-export.
pub use caret_mut::*;
pub use edit_dispatcher::*;
pub use editor_event::*;
pub use frame_composer::*;
pub use key_decoder::*;
pub use line_store::*;
pub use prompt::*;
pub use quit_confirmation::*;
pub use render_cache::*;
pub use save::*;
pub use session::*;
pub use status_message::*;
pub use ui_str::truncate_to_byte_len;
pub use viewport::*;

// Tests.
#[cfg(test)]
mod test_editor_scenarios;
