//! Output surfaces driven by an editor session
//!
//! A session never touches a page directly. It reports validity, messages
//! and the save-button state through a [`FeedbackSurface`], which the host
//! implements over whatever widgets it has. Missing widgets simply make the
//! corresponding calls no-ops.

use serde::Serialize;

use crate::errors::format_lines;

pub trait FeedbackSurface {
    /// Mark the outline field valid and show a confirmation message
    fn show_valid(&mut self, message: &str);

    /// Mark the outline field invalid; `lines` are 0-based and may be empty
    fn show_invalid(&mut self, message: &str, lines: &[usize]);

    /// Hide the confirmation message
    fn clear_valid_message(&mut self);

    fn set_save_enabled(&mut self, enabled: bool);

    /// Toggle the transient "was validated" styling on the form
    fn set_was_validated(&mut self, on: bool);
}

/// Surface for sessions embedded without any feedback widgets
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl FeedbackSurface for NullSurface {
    fn show_valid(&mut self, _message: &str) {}
    fn show_invalid(&mut self, _message: &str, _lines: &[usize]) {}
    fn clear_valid_message(&mut self) {}
    fn set_save_enabled(&mut self, _enabled: bool) {}
    fn set_was_validated(&mut self, _on: bool) {}
}

/// Surface that keeps the feedback as plain state for the host to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackState {
    pub field_invalid: bool,
    pub valid_message: Option<String>,
    pub invalid_message: Option<String>,
    pub error_lines: Vec<usize>,
    pub save_enabled: bool,
    pub was_validated: bool,
}

impl Default for FeedbackState {
    fn default() -> Self {
        Self {
            field_invalid: false,
            valid_message: None,
            invalid_message: None,
            error_lines: Vec::new(),
            save_enabled: true,
            was_validated: false,
        }
    }
}

impl FeedbackSurface for FeedbackState {
    fn show_valid(&mut self, message: &str) {
        self.field_invalid = false;
        self.valid_message = Some(message.to_string());
        self.invalid_message = None;
        self.error_lines.clear();
    }

    fn show_invalid(&mut self, message: &str, lines: &[usize]) {
        self.field_invalid = true;
        self.valid_message = None;
        self.invalid_message = Some(if lines.is_empty() {
            message.to_string()
        } else {
            format!("{} on lines: {}", message, format_lines(lines))
        });
        self.error_lines = lines.to_vec();
    }

    fn clear_valid_message(&mut self) {
        self.valid_message = None;
    }

    fn set_save_enabled(&mut self, enabled: bool) {
        self.save_enabled = enabled;
    }

    fn set_was_validated(&mut self, on: bool) {
        self.was_validated = on;
    }
}
