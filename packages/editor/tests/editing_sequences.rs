//! Tests for longer editing sequences
//!
//! This tests:
//! - Indent + outdent chains over multi-line selections
//! - Undo/redo across mixed structural edits
//! - Outline validity after each step

use roadmap_editor::{
    indent, outdent, EditorConfig, EditorSession, InputEvent, Key, Modifiers, Selection,
    TextBuffer,
};
use std::time::Duration;

const NOW: Duration = Duration::ZERO;

fn ctrl_z() -> InputEvent {
    InputEvent::key_with(Key::Char('z'), Modifiers::ctrl())
}

fn ctrl_shift_z() -> InputEvent {
    InputEvent::key_with(Key::Char('Z'), Modifiers::ctrl_shift())
}

#[test]
fn test_indent_outdent_chain_restores_text() {
    let original = "Find the idea\n\tLook around\n\tSurvey friends\nValidate\n\tPrototype";
    let mut buf = TextBuffer::new(original);
    buf.set_selection(Selection::new(14, 40));
    let sel = buf.selection();

    for _ in 0..3 {
        indent(&mut buf);
    }
    for _ in 0..3 {
        outdent(&mut buf);
    }

    assert_eq!(buf.text(), original);
    assert_eq!(buf.selection(), sel);
}

#[test]
fn test_outdent_stops_at_column_zero() {
    let mut buf = TextBuffer::new("a\n\tb\nc");
    buf.set_selection(Selection::new(2, 6));

    outdent(&mut buf);
    outdent(&mut buf);

    assert_eq!(buf.text(), "a\nb\nc");
}

#[test]
fn test_undo_redo_across_structural_edits() {
    let mut session = EditorSession::with_state("Root", EditorConfig::default());
    session.set_selection(Selection::caret(4));

    session.handle(InputEvent::key(Key::Enter), NOW);
    session.handle(InputEvent::paste("    Child"), NOW);
    session.handle(InputEvent::key(Key::Enter), NOW);
    session.handle(InputEvent::key(Key::Tab), NOW);

    let steps = [
        "Root\nChild\n",
        "Root\nChild",
        "Root\n",
        "Root",
    ];
    assert_eq!(session.text(), "Root\nChild\n\t");
    for expected in steps {
        session.handle(ctrl_z(), NOW);
        assert_eq!(session.text(), expected);
    }

    // nothing left to undo
    let outcome = session.handle(ctrl_z(), NOW);
    assert!(!outcome.changed);

    for expected in steps.iter().rev().skip(1) {
        session.handle(ctrl_shift_z(), NOW);
        assert_eq!(session.text(), *expected);
    }
    session.handle(ctrl_shift_z(), NOW);
    assert_eq!(session.text(), "Root\nChild\n\t");

    let outcome = session.handle(ctrl_shift_z(), NOW);
    assert!(!outcome.changed);
}

#[test]
fn test_new_edit_after_undo_drops_redo() {
    let mut session = EditorSession::with_state("a", EditorConfig::default());
    session.set_selection(Selection::caret(1));

    session.handle(InputEvent::key(Key::Enter), NOW);
    session.handle(ctrl_z(), NOW);
    assert_eq!(session.text(), "a");

    session.set_selection(Selection::caret(1));
    session.handle(InputEvent::paste("b"), NOW);
    assert_eq!(session.text(), "ab");

    session.handle(ctrl_shift_z(), NOW);
    assert_eq!(session.text(), "ab");
}

#[test]
fn test_history_limit_from_config() {
    let config = EditorConfig::from_json(r#"{ "historyLimit": 3 }"#).unwrap();
    let mut session = EditorSession::with_state("x", config);
    session.set_selection(Selection::caret(1));

    for _ in 0..5 {
        session.handle(InputEvent::key(Key::Enter), NOW);
    }

    assert_eq!(session.history().len(), 3);
    while session.undo() {}
    assert_eq!(session.text(), "x\n\n\n");
}
