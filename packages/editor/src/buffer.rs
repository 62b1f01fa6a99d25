//! # Text Buffer
//!
//! The editable outline text together with its selection.
//!
//! All public offsets are measured in characters from the start of the
//! buffer, never in bytes. Conversion to byte offsets happens internally
//! right before slicing.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A selection range inside the buffer (`start == end` is a plain caret)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection, swapping the ends if they are reversed
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    /// A caret without a selected range
    pub fn caret(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    fn clamp(self, max: usize) -> Self {
        Self {
            start: self.start.min(max),
            end: self.end.min(max),
        }
    }
}

/// Outline text owned by an editor session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBuffer {
    text: String,
    selection: Selection,
}

impl TextBuffer {
    /// Create a buffer with the caret at the very beginning
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: Selection::caret(0),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Number of characters in the buffer
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Move the selection, clamping both ends to the buffer
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamp(self.char_len());
    }

    /// Replace the whole text, keeping the selection where it still fits
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.selection = self.selection.clamp(self.char_len());
    }

    /// Offset of the first character of the line containing `pos`
    pub fn line_start(&self, pos: usize) -> usize {
        let end = self.byte_offset(pos);
        match self.text[..end].rfind('\n') {
            Some(nl) => self.text[..nl].chars().count() + 1,
            None => 0,
        }
    }

    /// Offset of the newline ending the line containing `pos` (or buffer end)
    pub fn line_end(&self, pos: usize) -> usize {
        let start = self.byte_offset(pos);
        match self.text[start..].find('\n') {
            Some(nl) => pos + self.text[start..start + nl].chars().count(),
            None => self.char_len(),
        }
    }

    /// Text between two character offsets
    pub fn slice(&self, range: Range<usize>) -> &str {
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end);
        &self.text[start..end]
    }

    /// Replace a character range with new text
    pub fn replace(&mut self, range: Range<usize>, with: &str) {
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end);
        self.text.replace_range(start..end, with);
        self.selection = self.selection.clamp(self.char_len());
    }

    /// Byte index of a character offset, saturating at the end of the text
    fn byte_offset(&self, pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(pos)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }
}

/// Leading run of tab characters of a line
pub fn leading_tabs(line: &str) -> &str {
    let n = line.len() - line.trim_start_matches('\t').len();
    &line[..n]
}

/// Nesting depth of a line (its count of leading tabs)
pub fn indent_depth(line: &str) -> usize {
    leading_tabs(line).len()
}

/// Leading whitespace run of a line
pub fn leading_whitespace(line: &str) -> &str {
    let n = line.len() - line.trim_start().len();
    &line[..n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_normalizes_order() {
        let sel = Selection::new(5, 2);
        assert_eq!(sel, Selection { start: 2, end: 5 });
        assert!(!sel.is_caret());
        assert!(Selection::caret(3).is_caret());
    }

    #[test]
    fn test_line_boundaries() {
        let buf = TextBuffer::new("ab\n\tcd\nef");

        assert_eq!(buf.line_start(0), 0);
        assert_eq!(buf.line_start(2), 0);
        assert_eq!(buf.line_start(3), 3);
        assert_eq!(buf.line_start(5), 3);
        assert_eq!(buf.line_end(0), 2);
        assert_eq!(buf.line_end(4), 6);
        assert_eq!(buf.line_end(8), 9);
    }

    #[test]
    fn test_offsets_are_characters() {
        let mut buf = TextBuffer::new("ár\nvíz");

        assert_eq!(buf.char_len(), 6);
        assert_eq!(buf.line_start(4), 3);
        assert_eq!(buf.line_end(3), 6);
        assert_eq!(buf.slice(3..6), "víz");

        buf.replace(4..5, "i");
        assert_eq!(buf.text(), "ár\nviz");
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut buf = TextBuffer::new("abc");
        buf.set_selection(Selection::new(1, 10));
        assert_eq!(buf.selection(), Selection { start: 1, end: 3 });

        buf.set_text("a");
        assert_eq!(buf.selection(), Selection { start: 1, end: 1 });
    }

    #[test]
    fn test_indent_helpers() {
        assert_eq!(indent_depth("\t\tfoo"), 2);
        assert_eq!(indent_depth("foo\t"), 0);
        assert_eq!(leading_tabs("\t \tfoo"), "\t");
        assert_eq!(leading_whitespace("  \tfoo "), "  \t");
    }
}
