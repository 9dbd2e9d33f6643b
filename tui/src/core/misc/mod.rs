// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod friendly_random_id;

// Re-export.
pub use friendly_random_id::*;
