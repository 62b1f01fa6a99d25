//! # Roadmap Editor
//!
//! Core of the roadmap outline editor: a tab-indented text field with
//! structural key bindings, paste normalization, linear history and an
//! indentation validator.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ host page: DOM events → InputEvent          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditorSession                       │
//! │  - paste normalization                      │
//! │  - Tab / Space / Enter handling             │
//! │  - undo/redo snapshots                      │
//! │  - indentation validation                   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ FeedbackSurface: messages, save button      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Outline format
//!
//! One task per line; each leading tab nests the task one level deeper
//! than the line above. The first line is never indented and no line may
//! be more than one level deeper than its predecessor.
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//! use roadmap_editor::{EditorConfig, EditorSession, InputEvent, Key, Selection};
//!
//! let mut session = EditorSession::with_state("Plan", EditorConfig::default());
//! session.set_selection(Selection::caret(4));
//!
//! let outcome = session.handle(InputEvent::key(Key::Enter), Duration::ZERO);
//! assert!(outcome.prevent_default);
//!
//! session.handle(InputEvent::paste("    Research"), Duration::ZERO);
//! assert_eq!(session.text(), "Plan\nResearch");
//! ```

mod buffer;
mod config;
mod errors;
mod event;
mod example;
mod feedback;
mod form;
mod history;
mod keys;
mod paste;
mod session;
mod timer;
mod validator;

pub use buffer::{indent_depth, leading_tabs, leading_whitespace, Selection, TextBuffer};
pub use config::EditorConfig;
pub use errors::{format_lines, EditorError};
pub use event::{ClickTarget, InputEvent, Key, Modifiers};
pub use example::{EXAMPLE_BASE_URL, EXAMPLE_DATE_FORMAT, EXAMPLE_ROADMAP, EXAMPLE_TITLE};
pub use feedback::{FeedbackState, FeedbackSurface, NullSurface};
pub use form::FormFields;
pub use history::{History, Snapshot};
pub use keys::{handle_key, indent, insert_newline, insert_space, outdent, KeyOutcome};
pub use paste::{apply_paste, normalize_paste};
pub use session::{EditorSession, EventOutcome};
pub use timer::OneShotTimer;
pub use validator::{find_indentation_errors, validate, ValidationReport};
