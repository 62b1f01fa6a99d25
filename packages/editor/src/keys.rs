//! # Structural Key Handling
//!
//! Replaces the host's default behaviour for Tab, Space and Enter so the
//! outline stays tab-indented.
//!
//! - **Tab / Shift+Tab** shift every line touched by the selection by one
//!   level. The first line of the buffer has no preceding newline and is
//!   never shifted: it is the root entry of the outline.
//! - **Space** inside a line's leading whitespace inserts a tab instead.
//! - **Enter** starts a new line carrying over the current line's tabs.

use tracing::trace;

use crate::buffer::{leading_tabs, Selection, TextBuffer};
use crate::event::{Key, Modifiers};

/// Whether a key was consumed (the host must then suppress its default)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
}

impl KeyOutcome {
    pub fn is_handled(self) -> bool {
        self == KeyOutcome::Handled
    }
}

/// Dispatch a structural key press against the buffer
pub fn handle_key(buffer: &mut TextBuffer, key: &Key, modifiers: Modifiers) -> KeyOutcome {
    if modifiers.ctrl || modifiers.alt || modifiers.meta {
        return KeyOutcome::Ignored;
    }

    match key {
        Key::Tab if modifiers.shift => outdent(buffer),
        Key::Tab => indent(buffer),
        Key::Space => insert_space(buffer),
        Key::Enter => insert_newline(buffer),
        _ => KeyOutcome::Ignored,
    }
}

/// Insert a tab at the start of every selected line except the first line
/// of the buffer
pub fn indent(buffer: &mut TextBuffer) -> KeyOutcome {
    let before = buffer.selection();
    let starts = shiftable_line_starts(buffer);

    for &q in starts.iter().rev() {
        buffer.replace(q..q, "\t");
    }

    let sel = map_selection(before, &starts, |q, p| q <= p, 1);
    trace!(lines = starts.len(), "Indented lines");
    buffer.set_selection(sel);

    KeyOutcome::Handled
}

/// Remove one leading tab from every selected line that has one
pub fn outdent(buffer: &mut TextBuffer) -> KeyOutcome {
    let before = buffer.selection();
    let removed: Vec<usize> = shiftable_line_starts(buffer)
        .into_iter()
        .filter(|&q| buffer.slice(q..q + 1) == "\t")
        .collect();

    for &q in removed.iter().rev() {
        buffer.replace(q..q + 1, "");
    }

    let sel = map_selection(before, &removed, |q, p| q < p, -1);
    trace!(lines = removed.len(), "Outdented lines");
    buffer.set_selection(sel);

    KeyOutcome::Handled
}

/// Turn a space typed in the leading whitespace of a line into a tab
pub fn insert_space(buffer: &mut TextBuffer) -> KeyOutcome {
    let sel = buffer.selection();
    if !sel.is_caret() {
        return KeyOutcome::Ignored;
    }

    let ls = buffer.line_start(sel.start);
    if !buffer.slice(ls..sel.start).trim().is_empty() {
        return KeyOutcome::Ignored;
    }

    buffer.replace(sel.range(), "\t");
    buffer.set_selection(Selection::caret(sel.start + 1));

    KeyOutcome::Handled
}

/// Start a new line indented like the current one
pub fn insert_newline(buffer: &mut TextBuffer) -> KeyOutcome {
    let sel = buffer.selection();
    let ls = buffer.line_start(sel.start);
    let tabs = leading_tabs(buffer.slice(ls..sel.start)).to_string();

    let inserted = format!("\n{}", tabs);
    buffer.replace(sel.range(), &inserted);
    buffer.set_selection(Selection::caret(sel.start + 1 + tabs.len()));

    KeyOutcome::Handled
}

/// Starts of the lines spanned by the selection that follow a newline
fn shiftable_line_starts(buffer: &TextBuffer) -> Vec<usize> {
    let sel = buffer.selection();
    let last = buffer.line_end(sel.end);

    let mut starts = Vec::new();
    let mut q = buffer.line_start(sel.start);
    loop {
        if q > 0 {
            starts.push(q);
        }

        let end = buffer.line_end(q);
        if end >= last {
            break;
        }
        q = end + 1;
    }

    starts
}

/// Map a selection through single-character edits at `positions`
///
/// `shifts(q, p)` decides whether an edit at original offset `q` moves a
/// position `p`.
fn map_selection(
    sel: Selection,
    positions: &[usize],
    shifts: impl Fn(usize, usize) -> bool,
    delta: isize,
) -> Selection {
    let map = |p: usize| {
        let n = positions.iter().filter(|&&q| shifts(q, p)).count() as isize;
        (p as isize + n * delta).max(0) as usize
    };

    Selection::new(map(sel.start), map(sel.end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(text: &str, start: usize, end: usize) -> TextBuffer {
        let mut buf = TextBuffer::new(text);
        buf.set_selection(Selection::new(start, end));
        buf
    }

    #[test]
    fn test_tab_indents_spanned_lines() {
        let mut buf = buffer("a\nb\nc\nd", 2, 5);

        assert_eq!(indent(&mut buf), KeyOutcome::Handled);

        assert_eq!(buf.text(), "a\n\tb\n\tc\nd");
        assert_eq!(buf.selection(), Selection::new(3, 7));
    }

    #[test]
    fn test_tab_never_shifts_root_line() {
        let mut buf = buffer("a\nb", 0, 3);

        indent(&mut buf);

        assert_eq!(buf.text(), "a\n\tb");
        assert_eq!(buf.selection(), Selection::new(0, 4));
    }

    #[test]
    fn test_tab_with_caret_inside_line() {
        let mut buf = buffer("a\n\tbc", 4, 4);

        indent(&mut buf);

        assert_eq!(buf.text(), "a\n\t\tbc");
        assert_eq!(buf.selection(), Selection::caret(5));
    }

    #[test]
    fn test_shift_tab_outdents() {
        let mut buf = buffer("a\n\tb\n\t\tc\nd", 3, 8);

        assert_eq!(outdent(&mut buf), KeyOutcome::Handled);

        assert_eq!(buf.text(), "a\nb\n\tc\nd");
        assert_eq!(buf.selection(), Selection::new(2, 6));
    }

    #[test]
    fn test_shift_tab_skips_lines_without_tabs() {
        let mut buf = buffer("a\nb\n\tc", 2, 6);

        outdent(&mut buf);

        assert_eq!(buf.text(), "a\nb\nc");
        assert_eq!(buf.selection(), Selection::new(2, 5));
    }

    #[test]
    fn test_indent_outdent_round_trip() {
        let original = "Root\n\tFirst\n\n\t\tDeep\nLast";
        let mut buf = buffer(original, 5, 18);
        let sel = buf.selection();

        indent(&mut buf);
        assert_ne!(buf.text(), original);
        outdent(&mut buf);

        assert_eq!(buf.text(), original);
        assert_eq!(buf.selection(), sel);
    }

    #[test]
    fn test_space_in_leading_whitespace_becomes_tab() {
        let mut buf = buffer("a\n\t", 3, 3);

        assert_eq!(insert_space(&mut buf), KeyOutcome::Handled);

        assert_eq!(buf.text(), "a\n\t\t");
        assert_eq!(buf.selection(), Selection::caret(4));
    }

    #[test]
    fn test_space_on_empty_line_becomes_tab() {
        let mut buf = buffer("a\n", 2, 2);

        assert!(insert_space(&mut buf).is_handled());
        assert_eq!(buf.text(), "a\n\t");
    }

    #[test]
    fn test_space_inside_content_is_native() {
        let mut buf = buffer("a\n\tFind", 5, 5);

        assert_eq!(insert_space(&mut buf), KeyOutcome::Ignored);
        assert_eq!(buf.text(), "a\n\tFind");
    }

    #[test]
    fn test_space_with_selection_is_native() {
        let mut buf = buffer("a\n\t\t", 2, 4);
        assert_eq!(insert_space(&mut buf), KeyOutcome::Ignored);
    }

    #[test]
    fn test_enter_carries_indentation() {
        let mut buf = buffer("a\n\t\tb", 5, 5);

        assert_eq!(insert_newline(&mut buf), KeyOutcome::Handled);

        assert_eq!(buf.text(), "a\n\t\tb\n\t\t");
        assert_eq!(buf.selection(), Selection::caret(8));
    }

    #[test]
    fn test_enter_replaces_selection() {
        let mut buf = buffer("a\n\tbXXc", 4, 6);

        insert_newline(&mut buf);

        assert_eq!(buf.text(), "a\n\tb\n\tc");
        assert_eq!(buf.selection(), Selection::caret(6));
    }

    #[test]
    fn test_modified_keys_are_ignored() {
        let mut buf = buffer("a\nb", 2, 2);

        assert_eq!(handle_key(&mut buf, &Key::Tab, Modifiers::ctrl()), KeyOutcome::Ignored);
        assert_eq!(handle_key(&mut buf, &Key::Char('x'), Modifiers::NONE), KeyOutcome::Ignored);
        assert_eq!(handle_key(&mut buf, &Key::Tab, Modifiers::shift()), KeyOutcome::Handled);
        assert_eq!(buf.text(), "a\nb");
    }
}
