// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Drives the whole engine (main loop, key decoder, dispatcher, frame composer) with
//! scripted terminal events.

use std::path::PathBuf;

use crossterm::event::{Event, KeyCode};
use pretty_assertions::assert_eq;

use crate::{EditorSession, StorageMock, TerminalMock, ctrl_key, key_press,
            open_editor_session, run_main_event_loop, size, truncate_to_byte_len,
            type_text, ui_str};

struct Scenario {
    terminal: TerminalMock,
    storage: StorageMock,
    session: EditorSession,
}

impl Scenario {
    fn new(storage: StorageMock, maybe_path: Option<&str>) -> Self {
        let mut terminal = TerminalMock::new(size!(col_count: 40, row_count: 6), []);
        let session =
            open_editor_session(maybe_path.map(PathBuf::from), &mut terminal, &storage)
                .unwrap();
        Self {
            terminal,
            storage,
            session,
        }
    }

    fn run(&mut self, events: impl IntoIterator<Item = Event>) {
        self.terminal.push_events(events);
        run_main_event_loop(&mut self.session, &mut self.terminal, &self.storage).unwrap();
        assert!(self.terminal.events.is_empty(), "loop exited before input ran out");
    }

    fn contents(&self) -> Vec<String> {
        self.session
            .document
            .lines()
            .iter()
            .map(|it| String::from_utf8_lossy(it.content()).into_owned())
            .collect()
    }

    fn caret(&self) -> (usize, usize) {
        (self.session.cursor.logical_row, self.session.cursor.logical_col)
    }
}

fn quit_dirty() -> [Event; 3] { [ctrl_key('q'), ctrl_key('q'), ctrl_key('q')] }

fn clipped(mut text: String, col_count: usize) -> String {
    truncate_to_byte_len(&mut text, col_count);
    text
}

#[test]
fn test_type_lines_into_empty_document() {
    let mut scenario = Scenario::new(StorageMock::default(), None);

    let mut events = type_text("abc");
    events.push(key_press(KeyCode::Enter));
    events.extend(type_text("d"));
    events.extend(quit_dirty());
    scenario.run(events);

    assert_eq!(scenario.contents(), vec!["abc", "d"]);
    assert_eq!(scenario.caret(), (1, 1));
    assert!(scenario.session.document.is_dirty());
}

#[test]
fn test_backspace_at_end_of_line() {
    let storage = StorageMock::default().with_file("hello.txt", b"hello\n");
    let mut scenario = Scenario::new(storage, Some("hello.txt"));

    let mut events = vec![key_press(KeyCode::End), key_press(KeyCode::Backspace)];
    events.extend(quit_dirty());
    scenario.run(events);

    assert_eq!(scenario.contents(), vec!["hell"]);
    assert_eq!(scenario.caret(), (0, 4));
    assert!(scenario.session.document.is_dirty());
}

#[test]
fn test_backspace_at_line_start_joins_lines() {
    let storage = StorageMock::default().with_file("fb.txt", b"foo\nbar\n");
    let mut scenario = Scenario::new(storage, Some("fb.txt"));

    let mut events = vec![key_press(KeyCode::Down), key_press(KeyCode::Backspace)];
    events.extend(quit_dirty());
    scenario.run(events);

    assert_eq!(scenario.contents(), vec!["foobar"]);
    assert_eq!(scenario.caret(), (0, 3));
}

#[test]
fn test_dirty_quit_needs_confirmation() {
    let mut scenario = Scenario::new(StorageMock::default(), None);

    // Two quit presses, an edit that starts the count over, two more quit presses,
    // and then one more that finally exits.
    let mut events = type_text("x");
    events.extend([ctrl_key('q'), ctrl_key('q')]);
    events.extend(type_text("y"));
    events.extend([ctrl_key('q'), ctrl_key('q')]);
    scenario.terminal.push_events(events);

    // The scripted input runs out before the loop exits.
    assert!(
        run_main_event_loop(
            &mut scenario.session,
            &mut scenario.terminal,
            &scenario.storage
        )
        .is_err()
    );
    assert_eq!(scenario.contents(), vec!["xy"]);
    assert_eq!(scenario.session.quit_confirmation.remaining(), 0);
    assert_eq!(
        scenario.terminal.last_frame_lines().last(),
        Some(&clipped(ui_str::quit_warning_msg(1), 40))
    );

    scenario.run([ctrl_key('q')]);
}

#[test]
fn test_save_then_quit_without_confirmation() {
    let storage = StorageMock::default().with_file("notes.txt", b"one\n");
    let mut scenario = Scenario::new(storage, Some("notes.txt"));

    let mut events = vec![key_press(KeyCode::End)];
    events.extend(type_text("!"));
    events.push(ctrl_key('s'));
    events.push(ctrl_key('q'));
    scenario.run(events);

    assert_eq!(scenario.storage.get_file("notes.txt"), Some(b"one!\n".to_vec()));
    assert!(!scenario.session.document.is_dirty());
    assert_eq!(
        scenario.terminal.last_frame_lines().last().map(String::as_str),
        Some("Wrote 5 bytes to file: notes.txt")
    );
}

#[test]
fn test_save_as_through_prompt() {
    let mut scenario = Scenario::new(StorageMock::default(), None);

    let mut events = type_text("hi");
    events.push(ctrl_key('s'));
    events.extend(type_text("out.txt"));
    events.push(key_press(KeyCode::Enter));
    events.push(ctrl_key('q'));
    scenario.run(events);

    assert_eq!(scenario.storage.get_file("out.txt"), Some(b"hi\n".to_vec()));
    assert_eq!(scenario.session.filename_for_display().as_deref(), Some("out.txt"));
}

#[test]
fn test_failed_save_keeps_document_dirty() {
    let mut scenario = Scenario::new(StorageMock::new_read_only(), None);

    let mut events = type_text("z");
    events.push(ctrl_key('s'));
    events.extend(type_text("ro.txt"));
    events.push(key_press(KeyCode::Enter));
    events.extend(quit_dirty());
    scenario.run(events);

    assert!(scenario.session.document.is_dirty());
    assert_eq!(scenario.session.filename_for_display().as_deref(), Some("ro.txt"));
}

#[test]
fn test_resize_redraws_without_counting_as_key() {
    let mut scenario = Scenario::new(StorageMock::default(), None);

    let mut events = type_text("a");
    events.extend([ctrl_key('q'), Event::Resize(20, 5), ctrl_key('q'), ctrl_key('q')]);
    scenario.run(events);

    assert_eq!(scenario.session.viewport.size, size!(col_count: 20, row_count: 3));
    // Frame drawn after the second quit warning, at the new size: 3 text rows, info
    // bar, status bar clipped to 20 columns.
    let lines = scenario.terminal.last_frame_lines();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "a");
    assert_eq!(lines[1], "~");
    assert_eq!(lines[2], "~");
    assert_eq!(lines[3].len(), 20);
    assert!(lines[3].starts_with("[Untitled]*"));
    assert_eq!(lines[4], clipped(ui_str::quit_warning_msg(1), 20));
}

#[test]
fn test_timeouts_and_unknown_events_are_ignored() {
    let mut scenario = Scenario::new(StorageMock::default(), None);
    scenario.terminal.push_timeout();
    scenario.terminal.push_events([Event::FocusGained, ctrl_key('x')]);
    scenario.terminal.push_timeout();

    scenario.run([ctrl_key('q')]);

    assert_eq!(scenario.contents(), vec![""]);
    assert!(!scenario.session.document.is_dirty());
}
