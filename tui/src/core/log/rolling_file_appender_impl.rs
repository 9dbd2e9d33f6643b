// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use crate::CommonResult;

/// Creates a file appender that never rolls over, so a whole editing session lands in
/// one log file. A relative path with no directory component is resolved against the
/// current working directory.
///
/// Note that if you wrap this up in a non blocking writer, log lines written right
/// before the process exits are lost, since the editor never holds on to the worker
/// guard.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no file name (eg: it ends in `..`)
/// - Insufficient permissions to access the file or directory
pub fn try_create_log_file_appender(
    path_str: &str,
) -> CommonResult<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't use '{}' as a log file. It does not name a file.",
            path.display()
        )
    })?;

    let parent = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok(tracing_appender::rolling::never(parent, file_name))
}
