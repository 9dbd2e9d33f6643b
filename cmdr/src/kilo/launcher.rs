// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use kilo_tui::{CommonResult, TracingConfig, run_editor,
               setup_default_miette_global_report_handler, try_initialize_logging_global};

use crate::kilo::{CLIArg, ui_str};

/// Sets up error reporting and logging, then runs the editor until the user quits.
///
/// A log file that can't be created doesn't stop the editor, it just runs without
/// logging.
///
/// # Errors
///
/// Returns any fatal error from the editor. The terminal has already been restored by
/// the time this returns.
pub fn run_app(cli_arg: CLIArg) -> CommonResult<()> {
    setup_default_miette_global_report_handler(ui_str::ISSUES_URL);

    let tracing_config = TracingConfig::from_env();
    let is_logging_enabled = try_initialize_logging_global(tracing_config).unwrap_or(false);

    // % is Display, ? is Debug.
    is_logging_enabled.then(|| {
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let result = run_editor(cli_arg.maybe_file_path());

    if let Err(ref report) = result {
        tracing::error!(message = "kilo could not run", error = ?report);
    }

    is_logging_enabled.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    result
}
