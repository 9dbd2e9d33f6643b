// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns raw crossterm events into the closed set of keys the editor understands.
//!
//! ```text
//! crossterm::Event
//!     ├─→ Event::Key(KeyEvent) (press only) → Key      → InputEvent::Keyboard
//!     ├─→ Event::Resize(cols, rows)         → Size     → InputEvent::Resize
//!     └─→ everything else                   → swallowed
//! ```

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{CommonResult, EditorSession, INPUT_POLL_TIMEOUT, Size, TerminalIo,
            render_frame};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable ASCII, or `\t`.
    Char(u8),
    /// Ctrl + a lowercase ASCII letter.
    Ctrl(u8),
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
    Backspace,
    Enter,
    Escape,
}

impl Key {
    pub const QUIT: Key = Key::Ctrl(b'q');
    pub const SAVE: Key = Key::Ctrl(b's');
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Keyboard(Key),
    Resize(Size),
}

impl TryFrom<KeyEvent> for Key {
    type Error = ();

    fn try_from(key_event: KeyEvent) -> Result<Self, Self::Error> {
        // Release and repeat only show up with the kitty keyboard protocol.
        if key_event.kind != KeyEventKind::Press {
            return Err(());
        }

        let is_ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        let is_alt = key_event.modifiers.contains(KeyModifiers::ALT);

        Ok(match key_event.code {
            KeyCode::Left => Key::ArrowLeft,
            KeyCode::Right => Key::ArrowRight,
            KeyCode::Up => Key::ArrowUp,
            KeyCode::Down => Key::ArrowDown,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Delete => Key::Delete,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab if !is_ctrl && !is_alt => Key::Char(b'\t'),
            KeyCode::Char(ch) => {
                // One byte per column, so anything outside ASCII is dropped.
                if is_alt || !ch.is_ascii() {
                    return Err(());
                }
                let byte = u8::try_from(ch).map_err(|_| ())?;
                match (is_ctrl, byte.to_ascii_lowercase()) {
                    (true, b'h') => Key::Backspace,
                    (true, lower) if lower.is_ascii_lowercase() => Key::Ctrl(lower),
                    (true, _) => return Err(()),
                    (false, _) if byte.is_ascii_control() => return Err(()),
                    (false, _) => Key::Char(byte),
                }
            }
            // Modifier only presses, function keys, media keys, etc.
            _ => return Err(()),
        })
    }
}

impl TryFrom<Event> for InputEvent {
    type Error = ();

    fn try_from(event: Event) -> Result<Self, Self::Error> {
        match event {
            Event::Key(key_event) => Key::try_from(key_event).map(InputEvent::Keyboard),
            Event::Resize(columns, rows) => {
                Ok(InputEvent::Resize(Size::from_crossterm(columns, rows)))
            }
            // Mouse, focus, and bracketed paste.
            _ => Err(()),
        }
    }
}

/// Blocks until the user presses a key the editor understands.
///
/// A resize is handled right here: the terminal is asked for its size again, the
/// viewport takes it on and a frame is rendered straight away, then the wait goes on.
/// Callers never see a resize.
///
/// # Errors
///
/// Returns an error if input can't be read or the terminal can't be written to.
pub fn read_key(
    session: &mut EditorSession,
    terminal: &mut dyn TerminalIo,
) -> CommonResult<Key> {
    loop {
        let Some(event) = terminal.poll_event(INPUT_POLL_TIMEOUT)? else {
            continue;
        };

        match InputEvent::try_from(event) {
            Ok(InputEvent::Keyboard(key)) => return Ok(key),
            Ok(InputEvent::Resize(reported_size)) => {
                let new_size = terminal.lookup_size()?;
                tracing::debug!(
                    message = "read_key -> resize",
                    reported_size = ?reported_size,
                    size = ?new_size
                );
                session.set_terminal_size(new_size);
                render_frame(session, terminal)?;
            }
            Err(()) => {}
        }
    }
}
