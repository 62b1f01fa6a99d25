//! # Editor Session
//!
//! One outline editor instance: the text buffer, its history, the
//! validation state and the surfaces reporting it.
//!
//! Every input event is handled synchronously. The only deferred work is
//! clearing the "was validated" flag and ending the save cooldown, both
//! driven by [`EditorSession::tick`].

use std::time::Duration;

use tracing::{debug, info};

use crate::buffer::{Selection, TextBuffer};
use crate::config::EditorConfig;
use crate::event::{ClickTarget, InputEvent, Key, Modifiers};
use crate::example::EXAMPLE_ROADMAP;
use crate::feedback::{FeedbackState, FeedbackSurface};
use crate::form::FormFields;
use crate::history::History;
use crate::keys::handle_key;
use crate::paste::apply_paste;
use crate::timer::OneShotTimer;
use crate::validator::{validate, ValidationReport};

/// What the host should do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// Suppress the host's native handling of the event
    pub prevent_default: bool,

    /// The buffer text changed
    pub changed: bool,
}

/// Single outline editor bound to its feedback surface
pub struct EditorSession<S: FeedbackSurface = FeedbackState> {
    config: EditorConfig,
    buffer: TextBuffer,
    history: History,

    /// Text restored by the reset button
    reset_text: String,

    fields: FormFields,
    reset_fields: FormFields,

    surface: S,
    report: ValidationReport,
    showing_invalid: bool,

    validation_flag: OneShotTimer,
    save_cooldown: OneShotTimer,
}

impl<S: FeedbackSurface> EditorSession<S> {
    /// Create a session over the initial outline text
    pub fn new(text: impl Into<String>, config: EditorConfig, mut surface: S) -> Self {
        let text = text.into();
        let history = History::with_max_entries(&text, config.history_limit);
        let report = validate(&text);
        surface.set_save_enabled(report.is_valid());

        Self {
            config,
            buffer: TextBuffer::new(text.clone()),
            history,
            reset_text: text,
            fields: FormFields::default(),
            reset_fields: FormFields::default(),
            surface,
            report,
            showing_invalid: false,
            validation_flag: OneShotTimer::new(),
            save_cooldown: OneShotTimer::new(),
        }
    }

    /// Initial form fields; reset restores their date format and base URL
    pub fn with_fields(mut self, fields: FormFields) -> Self {
        self.reset_fields = fields.clone();
        self.fields = fields;
        self
    }

    /// Disable saving for the configured cooldown, starting at `now`
    pub fn start_save_cooldown(&mut self, now: Duration) {
        let cooldown = self.config.save_cooldown();
        if cooldown.is_zero() {
            return;
        }

        self.surface.set_save_enabled(false);
        self.save_cooldown.schedule(now, cooldown);
    }

    /// Handle one input event
    pub fn handle(&mut self, event: InputEvent, now: Duration) -> EventOutcome {
        match event {
            InputEvent::Paste { text } => self.handle_paste(&text, now),
            InputEvent::KeyPress { key, modifiers } => self.handle_key_press(&key, modifiers, now),
            InputEvent::Click { target } => self.handle_click(target, now),
        }
    }

    fn handle_paste(&mut self, clipboard: &str, now: Duration) -> EventOutcome {
        let before = self.buffer.text().to_string();
        self.history.checkpoint(&before);

        match apply_paste(&mut self.buffer, clipboard) {
            Ok(()) => {
                self.history.checkpoint(self.buffer.text());
                self.validate(now);
            }
            Err(e) => {
                self.surface.show_invalid(&e.user_message(), &[]);
                self.showing_invalid = true;
            }
        }

        EventOutcome {
            prevent_default: true,
            changed: self.buffer.text() != before,
        }
    }

    fn handle_key_press(&mut self, key: &Key, modifiers: Modifiers, now: Duration) -> EventOutcome {
        let before = self.buffer.text().to_string();

        let prevent_default = if modifiers.ctrl && key.is_letter('z') {
            if modifiers.shift {
                self.redo();
            } else {
                self.undo();
            }
            true
        } else if modifiers.ctrl && key.is_letter('y') {
            self.redo();
            true
        } else {
            let structural = matches!(key, Key::Tab | Key::Enter);
            if structural {
                self.history.checkpoint(&before);
            }

            let handled = handle_key(&mut self.buffer, key, modifiers).is_handled();

            if structural && handled {
                self.history.checkpoint(self.buffer.text());
            }
            handled
        };

        self.validate(now);

        EventOutcome {
            prevent_default,
            changed: self.buffer.text() != before,
        }
    }

    fn handle_click(&mut self, target: ClickTarget, now: Duration) -> EventOutcome {
        let before = self.buffer.text().to_string();

        let prevent_default = match target {
            ClickTarget::Reset => {
                let reset = self.reset_text.clone();
                self.replace_text(&reset);
                self.fields = self.fields.reset_to(&self.reset_fields);
                self.validate(now);
                true
            }
            ClickTarget::LoadExample => {
                self.replace_text(EXAMPLE_ROADMAP);
                self.fields = FormFields::example();
                self.validate(now);
                true
            }
            ClickTarget::Submit => !self.validate(now).is_valid(),
        };

        EventOutcome {
            prevent_default,
            changed: self.buffer.text() != before,
        }
    }

    /// Replace the whole text as one undoable step
    fn replace_text(&mut self, text: &str) {
        self.history.checkpoint(self.buffer.text());
        self.buffer.set_text(text);
        self.buffer.set_selection(Selection::caret(0));
        self.history.checkpoint(self.buffer.text());
    }

    /// Step back in history; unsaved typing is checkpointed first
    pub fn undo(&mut self) -> bool {
        self.history.checkpoint(self.buffer.text());

        match self.history.undo().map(str::to_string) {
            Some(text) => {
                self.restore(text);
                true
            }
            None => false,
        }
    }

    /// Step forward in history; unsaved typing is checkpointed first and
    /// then discards the redo entries
    pub fn redo(&mut self) -> bool {
        self.history.checkpoint(self.buffer.text());

        match self.history.redo().map(str::to_string) {
            Some(text) => {
                self.restore(text);
                true
            }
            None => false,
        }
    }

    fn restore(&mut self, text: String) {
        let end = text.chars().count();
        self.buffer.set_text(text);
        self.buffer.set_selection(Selection::caret(end));
        debug!(cursor = self.history.cursor(), "Restored history snapshot");
    }

    /// Validate the outline and update every surface
    pub fn validate(&mut self, now: Duration) -> &ValidationReport {
        self.report = validate(self.buffer.text());

        self.surface.set_was_validated(true);
        self.validation_flag
            .schedule(now, self.config.validation_flag_timeout());

        if self.report.is_valid() {
            if self.showing_invalid {
                self.surface.show_valid(&self.config.valid_message);
                self.showing_invalid = false;
            }
            if !self.save_cooldown.is_pending() {
                self.surface.set_save_enabled(true);
            }
        } else {
            info!(lines = ?self.report.error_lines, "Outline has invalid indentation");
            self.surface
                .show_invalid(&self.config.invalid_message, &self.report.error_lines);
            self.surface.set_save_enabled(false);
            self.showing_invalid = true;
        }

        &self.report
    }

    /// Fire any deferred work that is due at `now`
    pub fn tick(&mut self, now: Duration) {
        if self.validation_flag.fire_if_due(now) {
            self.surface.set_was_validated(false);
            self.surface.clear_valid_message();
        }

        if self.save_cooldown.fire_if_due(now) && self.report.is_valid() {
            self.surface.set_save_enabled(true);
        }
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn selection(&self) -> Selection {
        self.buffer.selection()
    }

    /// Move the selection (e.g. after the user clicked inside the field)
    pub fn set_selection(&mut self, selection: Selection) {
        self.buffer.set_selection(selection);
    }

    /// Sync plain typing done natively by the host
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer.set_text(text);
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Sync form fields edited natively by the host
    pub fn set_fields(&mut self, fields: FormFields) {
        self.fields = fields;
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

impl EditorSession<FeedbackState> {
    /// Session reporting into a plain [`FeedbackState`]
    pub fn with_state(text: impl Into<String>, config: EditorConfig) -> Self {
        Self::new(text, config, FeedbackState::default())
    }
}
