// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use crate::{CommonResult, EditorArgsMut, ok, prompt, ui_str};

/// Writes the document to its file, asking for a filename first if it doesn't have
/// one. Save failures are not errors: they end up in the status bar, and the document
/// stays dirty.
///
/// # Errors
///
/// Only fatal terminal errors from the filename prompt.
pub fn save_document(args: &mut EditorArgsMut<'_>) -> CommonResult<()> {
    if args.session.maybe_filename.is_none() {
        match prompt(args.session, args.terminal, ui_str::save_as_prompt_msg)? {
            Some(filename) => args.session.maybe_filename = Some(PathBuf::from(filename)),
            None => {
                args.session.set_status_message(ui_str::save_aborted_msg());
                return ok!();
            }
        }
    }

    let Some(path) = args.session.maybe_filename.clone() else {
        return ok!();
    };
    let bytes = args.session.document.to_bytes();

    match args.storage.write_bytes(&path, &bytes) {
        Ok(bytes_written) => {
            args.session.document.mark_clean();
            let filename = path.to_string_lossy();
            tracing::info!(message = "save -> ok", filename = %filename, bytes_written);
            args.session
                .set_status_message(ui_str::save_succeeded_msg(bytes_written, &filename));
        }
        Err(error) => {
            tracing::warn!(message = "save -> failed", path = ?path, error = %error);
            args.session
                .set_status_message(ui_str::save_failed_msg(&error));
        }
    }

    ok!()
}
