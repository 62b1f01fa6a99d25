//! # Paste Normalizer
//!
//! Turns clipboard text indented with an arbitrary whitespace unit into
//! tab-indented outline text.
//!
//! ```text
//! "    Plan\n      Research\n      Build"
//!        ↓ strip common indent, trim right
//! "Plan\n  Research\n  Build"
//!        ↓ first nested indent ("  ") becomes the unit
//! "Plan\n\tResearch\n\tBuild"
//! ```

use tracing::{debug, warn};

use crate::buffer::{leading_whitespace, Selection, TextBuffer};
use crate::EditorError;

/// Normalize clipboard text into tab-indented outline text
pub fn normalize_paste(clipboard: &str) -> Result<String, EditorError> {
    let mut lines: Vec<&str> = clipboard
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .skip_while(|line| line.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(EditorError::EmptyPaste);
    }

    let common = leading_whitespace(lines[0]);
    if !common.is_empty() && !lines.iter().all(|line| line.starts_with(common)) {
        return Err(EditorError::InconsistentIndentation);
    }

    for line in lines.iter_mut() {
        *line = line[common.len()..].trim_end();
    }

    let unit = lines
        .iter()
        .map(|line| leading_whitespace(line))
        .find(|ws| !ws.is_empty());

    let joined = lines.join("\n");

    match unit {
        Some(unit) if unit != "\t" => {
            debug!(unit = ?unit, "Converting indent unit to tabs");
            Ok(joined.replace(unit, "\t"))
        }
        _ => Ok(joined),
    }
}

/// Replace the buffer's selection with normalized clipboard text
///
/// The caret ends up right after the inserted text. On error the buffer is
/// left untouched.
pub fn apply_paste(buffer: &mut TextBuffer, clipboard: &str) -> Result<(), EditorError> {
    let value = match normalize_paste(clipboard) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Rejected paste");
            return Err(e);
        }
    };

    let sel = buffer.selection();
    buffer.replace(sel.range(), &value);
    buffer.set_selection(Selection::caret(sel.start + value.chars().count()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_indent_is_stripped() {
        assert_eq!(normalize_paste("  a\n  b").unwrap(), "a\nb");
    }

    #[test]
    fn test_space_unit_becomes_tab() {
        let pasted = "Plan\n    Research\n        Interviews\n    Build";
        assert_eq!(
            normalize_paste(pasted).unwrap(),
            "Plan\n\tResearch\n\t\tInterviews\n\tBuild"
        );
    }

    #[test]
    fn test_common_indent_then_nested_unit() {
        let pasted = "  Plan\n    Research\n  Ship";
        assert_eq!(normalize_paste(pasted).unwrap(), "Plan\n\tResearch\nShip");
    }

    #[test]
    fn test_leading_blank_lines_are_dropped() {
        assert_eq!(normalize_paste("\n   \n\ta\n\t\tb").unwrap(), "a\n\tb");
    }

    #[test]
    fn test_tab_only_text_is_unchanged() {
        let text = "a\n\tb\n\t\tc\n\td\ne";
        assert_eq!(normalize_paste(text).unwrap(), text);
    }

    #[test]
    fn test_single_line_verbatim() {
        assert_eq!(normalize_paste("Launch [2021-04-01]").unwrap(), "Launch [2021-04-01]");
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        assert_eq!(normalize_paste("a  \n\tb\t\r\n").unwrap(), "a\n\tb\n");
    }

    #[test]
    fn test_whitespace_only_is_empty_paste() {
        assert!(matches!(normalize_paste(""), Err(EditorError::EmptyPaste)));
        assert!(matches!(normalize_paste(" \n\t\n  "), Err(EditorError::EmptyPaste)));
    }

    #[test]
    fn test_inconsistent_indentation() {
        assert!(matches!(
            normalize_paste("  a\n b"),
            Err(EditorError::InconsistentIndentation)
        ));
    }

    #[test]
    fn test_apply_paste_replaces_selection() {
        let mut buf = TextBuffer::new("Start\nXX\nEnd");
        buf.set_selection(Selection::new(6, 8));

        apply_paste(&mut buf, "  a\n    b").unwrap();

        assert_eq!(buf.text(), "Start\na\n\tb\nEnd");
        assert_eq!(buf.selection(), Selection::caret(10));
    }

    #[test]
    fn test_apply_paste_error_leaves_buffer() {
        let mut buf = TextBuffer::new("keep");
        buf.set_selection(Selection::caret(4));

        let result = apply_paste(&mut buf, "  a\n b");

        assert!(result.is_err());
        assert_eq!(buf.text(), "keep");
        assert_eq!(buf.selection(), Selection::caret(4));
    }
}
