//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Clipboard contains no usable lines")]
    EmptyPaste,

    #[error("Pasted lines do not share a common indentation")]
    InconsistentIndentation,

    #[error("Invalid indentation on lines: {}", format_lines(.lines))]
    IndentationJump { lines: Vec<usize> },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl EditorError {
    /// Short message shown next to the text field
    pub fn user_message(&self) -> String {
        match self {
            EditorError::EmptyPaste => "empty lines".to_string(),
            EditorError::InconsistentIndentation => "some lines are not indented".to_string(),
            EditorError::IndentationJump { lines } => {
                format!("invalid indentation on lines: {}", format_lines(lines))
            }
            EditorError::Config(e) => format!("invalid configuration: {}", e),
        }
    }
}

/// Render 0-based line indices as a 1-based, comma separated list
pub fn format_lines(lines: &[usize]) -> String {
    lines
        .iter()
        .map(|l| (l + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(EditorError::EmptyPaste.user_message(), "empty lines");
        assert_eq!(
            EditorError::InconsistentIndentation.user_message(),
            "some lines are not indented"
        );

        let err = EditorError::IndentationJump { lines: vec![0, 3] };
        assert_eq!(err.user_message(), "invalid indentation on lines: 1, 4");
        assert_eq!(err.to_string(), "Invalid indentation on lines: 1, 4");
    }
}
