// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Shown at the bottom of fatal error reports.
pub const ISSUES_URL: &str =
    "Please report issues at: https://github.com/r3bl-org/r3bl-open-core/issues";
