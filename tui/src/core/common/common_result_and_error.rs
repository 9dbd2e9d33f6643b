// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use std::path::PathBuf;

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// It is basically `miette::Result<T, miette::Report>`. Any error that implements
/// [`miette::Diagnostic`] (like [`EditorErrorCouldNot`]) can be returned with `?`, and
/// foreign errors can be lifted with [`miette::IntoDiagnostic::into_diagnostic`].
pub type CommonResult<T> = miette::Result<T>;

/// Fatal failures. Any of these ends the process with exit code 1, after an attempt is
/// made to restore the terminal.
#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum EditorErrorCouldNot {
    #[error("📐 Could not look up the terminal window size")]
    #[diagnostic(
        code(kilo::terminal::size),
        help("Make sure that kilo is running in an interactive terminal")
    )]
    LookupTerminalSize,

    #[error("📑 Could not open file: '{path}'")]
    #[diagnostic(code(kilo::file::open))]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("⌨️ Could not read the next input event from the terminal")]
    #[diagnostic(code(kilo::terminal::input))]
    ReadInputEvent,

    #[error("🖥️ Could not write frame to the terminal")]
    #[diagnostic(code(kilo::terminal::output))]
    WriteFrame,

    #[error("🔒 Could not put the terminal into raw mode")]
    #[diagnostic(code(kilo::terminal::raw_mode))]
    EnterRawMode,

    #[error("🔓 Could not restore the terminal to its original mode")]
    #[diagnostic(code(kilo::terminal::restore))]
    RestoreTerminal,
}

/// Recoverable failures while saving. The `Display` text of these ends up in the status
/// bar as `Can't save! I/O error: {it}`, and the document stays dirty.
#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum SaveErrorCouldNot {
    #[error("{source}")]
    #[diagnostic(code(kilo::save::create))]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{source}")]
    #[diagnostic(code(kilo::save::write))]
    WriteBytes {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Syntactic sugar for `Ok(())` and `Ok($value)`.
#[macro_export]
macro_rules! ok {
    () => {
        Ok(())
    };
    ($value:expr) => {
        Ok($value)
    };
}
