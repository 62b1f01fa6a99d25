//! # Text History
//!
//! Linear undo/redo over explicit buffer snapshots, independent of the
//! host's native undo.
//!
//! ## Design
//!
//! - Snapshots are immutable copies of the whole buffer
//! - A cursor points at the snapshot matching the last saved state
//! - Checkpointing a new state drops everything after the cursor
//! - Undo/redo only move the cursor
//!
//! ## Example
//!
//! ```rust
//! use roadmap_editor::History;
//!
//! let mut history = History::new("a");
//! history.checkpoint("a\n\tb");
//!
//! assert_eq!(history.undo(), Some("a"));
//! assert_eq!(history.redo(), Some("a\n\tb"));
//! ```

use std::sync::Arc;

use tracing::debug;

/// Immutable copy of the buffer at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(Arc<str>);

impl Snapshot {
    pub fn new(text: &str) -> Self {
        Self(Arc::from(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Undo/redo history for a single editor session
#[derive(Debug, Clone)]
pub struct History {
    /// Saved states (oldest first)
    snapshots: Vec<Snapshot>,

    /// Index of the snapshot matching the last saved state
    cursor: usize,

    /// Maximum number of snapshots kept (0 = unlimited)
    max_entries: usize,
}

impl History {
    /// Create a history seeded with the initial buffer
    pub fn new(initial: &str) -> Self {
        Self::with_max_entries(initial, 0)
    }

    /// Create a history that keeps at most `max_entries` snapshots
    pub fn with_max_entries(initial: &str, max_entries: usize) -> Self {
        Self {
            snapshots: vec![Snapshot::new(initial)],
            cursor: 0,
            max_entries,
        }
    }

    /// Save the buffer if it differs from the current snapshot
    ///
    /// Returns `true` when a snapshot was pushed. Any redo entries are
    /// discarded in that case.
    pub fn checkpoint(&mut self, text: &str) -> bool {
        if self.current() == text {
            return false;
        }

        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(Snapshot::new(text));
        self.cursor += 1;

        if self.max_entries > 0 && self.snapshots.len() > self.max_entries {
            let excess = self.snapshots.len() - self.max_entries;
            self.snapshots.drain(..excess);
            self.cursor -= excess;
        }

        debug!(cursor = self.cursor, entries = self.snapshots.len(), "History checkpoint");
        true
    }

    /// Step back one snapshot
    pub fn undo(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }

        self.cursor -= 1;
        Some(self.snapshots[self.cursor].as_str())
    }

    /// Step forward one snapshot
    pub fn redo(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }

        self.cursor += 1;
        Some(self.snapshots[self.cursor].as_str())
    }

    /// The snapshot at the cursor
    pub fn current(&self) -> &str {
        self.snapshots[self.cursor].as_str()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Forget everything and start over from `initial`
    pub fn clear(&mut self, initial: &str) {
        self.snapshots = vec![Snapshot::new(initial)];
        self.cursor = 0;
    }
}
