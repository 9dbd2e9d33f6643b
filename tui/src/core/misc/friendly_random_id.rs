// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write as _;

use rand::{Rng, rngs::ThreadRng};

const ADJECTIVES: [&str; 16] = [
    "brisk", "calm", "dusty", "eager", "fuzzy", "glad", "hasty", "jolly", "keen",
    "lucky", "mellow", "nimble", "plucky", "quiet", "rusty", "sunny",
];

const NOUNS: [&str; 16] = [
    "buffer", "caret", "column", "cursor", "draft", "gutter", "line", "margin", "page",
    "prompt", "quill", "scroll", "sheet", "tab", "viewport", "word",
];

/// Generates an id that is easy to read in a directory listing, like
/// `kilo-plucky-caret-042-<uuid>`. The trailing v4 uuid makes collisions between tests that
/// run in parallel practically impossible.
#[must_use]
pub fn generate_friendly_random_id() -> String {
    let mut rng: ThreadRng = rand::rng();

    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let number: u16 = rng.random_range(0..1000);
    let uuid = uuid::Uuid::new_v4();

    let mut acc = String::with_capacity(adjective.len() + noun.len() + 3 + 3 + 36);
    _ = write!(acc, "kilo-{adjective}-{noun}-{number:03}-{uuid}");
    acc
}
