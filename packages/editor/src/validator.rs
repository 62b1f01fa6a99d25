//! # Indentation Validator
//!
//! An outline is valid when its first line is not indented and no line is
//! nested more than one level deeper than the line before it.

use serde::Serialize;

use crate::buffer::indent_depth;
use crate::errors::format_lines;
use crate::EditorError;

/// Indices (0-based) of the lines violating the indentation rule
pub fn find_indentation_errors(text: &str) -> Vec<usize> {
    let mut errors = Vec::new();
    let mut prev = 0;

    for (idx, line) in text.split('\n').enumerate() {
        let depth = indent_depth(line);

        if (idx == 0 && depth > 0) || depth > prev + 1 {
            errors.push(idx);
        }

        prev = depth;
    }

    errors
}

/// Result of validating an outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub error_lines: Vec<usize>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.error_lines.is_empty()
    }

    /// Message naming the offending lines (1-based), if any
    pub fn message(&self) -> Option<String> {
        if self.is_valid() {
            None
        } else {
            Some(format!(
                "invalid indentation on lines: {}",
                format_lines(&self.error_lines)
            ))
        }
    }

    pub fn into_result(self) -> Result<(), EditorError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(EditorError::IndentationJump {
                lines: self.error_lines,
            })
        }
    }
}

/// Validate a whole outline
pub fn validate(text: &str) -> ValidationReport {
    ValidationReport {
        error_lines: find_indentation_errors(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_level_steps_are_valid() {
        assert!(find_indentation_errors("a\n\tb\n\t\tc").is_empty());
    }

    #[test]
    fn test_jump_of_two_levels() {
        assert_eq!(find_indentation_errors("a\n\t\tb"), vec![1]);
    }

    #[test]
    fn test_indented_root_line() {
        assert_eq!(find_indentation_errors("\ta"), vec![0]);
    }

    #[test]
    fn test_decrease_is_allowed() {
        assert!(find_indentation_errors("a\n\tb\n\t\tc\nd\n\te").is_empty());
    }

    #[test]
    fn test_scan_continues_after_error() {
        // line 1 jumps to depth 2, so line 2 at depth 3 is only +1 from it
        assert_eq!(find_indentation_errors("a\n\t\tb\n\t\t\tc\nd\n\t\t\te"), vec![1, 4]);
    }

    #[test]
    fn test_empty_and_blank_lines() {
        assert!(find_indentation_errors("").is_empty());
        assert!(find_indentation_errors("a\n\nb\n").is_empty());
    }

    #[test]
    fn test_report_message() {
        let report = validate("\ta\n\t\t\tb");
        assert!(!report.is_valid());
        assert_eq!(report.error_lines, vec![0, 1]);
        assert_eq!(
            report.message().as_deref(),
            Some("invalid indentation on lines: 1, 2")
        );
        assert!(matches!(
            report.into_result(),
            Err(EditorError::IndentationJump { lines }) if lines == vec![0, 1]
        ));

        assert_eq!(validate("a\n\tb").message(), None);
    }
}
