// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CaretDirection, Key};

/// What a decoded [`Key`] asks the editor to do.
///
/// By providing a conversion from [`Key`] to [`EditorEvent`] it becomes easier to write
/// the dispatcher, which only has to deal with intent and not with keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorEvent {
    InsertChar(u8),
    InsertNewLine,
    Delete,
    Backspace,
    Home,
    End,
    PageUp,
    PageDown,
    MoveCaret(CaretDirection),
    Save,
    Quit,
    /// Escape, and control keys with no binding.
    Noop,
}

impl From<Key> for EditorEvent {
    fn from(key: Key) -> Self {
        match key {
            Key::QUIT => EditorEvent::Quit,
            Key::SAVE => EditorEvent::Save,
            Key::Ctrl(_) | Key::Escape => EditorEvent::Noop,
            Key::Char(byte) => EditorEvent::InsertChar(byte),
            Key::Enter => EditorEvent::InsertNewLine,
            Key::Delete => EditorEvent::Delete,
            Key::Backspace => EditorEvent::Backspace,
            Key::Home => EditorEvent::Home,
            Key::End => EditorEvent::End,
            Key::PageUp => EditorEvent::PageUp,
            Key::PageDown => EditorEvent::PageDown,
            Key::ArrowLeft => EditorEvent::MoveCaret(CaretDirection::Left),
            Key::ArrowRight => EditorEvent::MoveCaret(CaretDirection::Right),
            Key::ArrowUp => EditorEvent::MoveCaret(CaretDirection::Up),
            Key::ArrowDown => EditorEvent::MoveCaret(CaretDirection::Down),
        }
    }
}
