// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, EditorSession, Key, TerminalIo, ok, read_key, render_frame};

/// Collects one line of text in the status bar. `template` turns the input so far into
/// the status message, eg: [`crate::ui_str::save_as_prompt_msg`].
///
/// Returns `Ok(None)` if the user pressed escape. Enter on an empty input is ignored.
/// Either way the status message is cleared on the way out.
///
/// # Errors
///
/// Returns an error if input can't be read or a frame can't be written.
pub fn prompt(
    session: &mut EditorSession,
    terminal: &mut dyn TerminalIo,
    template: impl Fn(&str) -> String,
) -> CommonResult<Option<String>> {
    let mut input = String::new();

    loop {
        session.set_status_message(template(&input));
        render_frame(session, terminal)?;

        match read_key(session, terminal)? {
            Key::Backspace | Key::Delete => {
                input.pop();
            }
            Key::Escape => {
                session.clear_status_message();
                return ok!(None);
            }
            Key::Enter if !input.is_empty() => {
                session.clear_status_message();
                return ok!(Some(input));
            }
            Key::Char(byte) if !byte.is_ascii_control() => input.push(char::from(byte)),
            _ => {}
        }
    }
}
