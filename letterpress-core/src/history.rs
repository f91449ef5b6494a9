//! Linear undo/redo history of full document snapshots.
//!
//! ```text
//!  entries:  [s0] [s1] [s2] [s3]
//!                       ^cursor
//!  undo -> s1, redo -> s3, push(s4) -> [s0] [s1] [s2] [s4]
//! ```
//!
//! The entry at the cursor is always the current document. `push` is the only
//! way entries are added; undo and redo only move the cursor.

use std::collections::VecDeque;

use crate::Block;

/// Default maximum number of retained snapshots.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Result of an undo or redo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOutcome {
    /// The cursor moved and the document was restored.
    Changed,
    /// Already at the boundary; nothing happened.
    NoOp,
}

/// Bounded snapshot history with a cursor.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Vec<Block>>,
    cursor: usize,
    limit: usize,
}

impl History {
    /// Create a history whose first entry is `initial`.
    ///
    /// A `limit` of zero is treated as one.
    #[must_use]
    pub fn new(initial: Vec<Block>, limit: usize) -> Self {
        let mut entries = VecDeque::new();
        entries.push_back(initial);
        Self {
            entries,
            cursor: 0,
            limit: limit.max(1),
        }
    }

    /// Record a new current state, discarding any redo entries.
    ///
    /// The oldest entries are dropped once the limit is exceeded.
    pub fn push(&mut self, snapshot: Vec<Block>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(snapshot);
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one entry and return it, or `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&[Block]> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(Vec::as_slice)
    }

    /// Step forward one entry and return it, or `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&[Block]> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).map(Vec::as_slice)
    }

    /// The entry at the cursor.
    #[must_use]
    pub fn current(&self) -> &[Block] {
        self.entries
            .get(self.cursor)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Check if undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Check if redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of undo steps available.
    #[must_use]
    pub fn undo_levels(&self) -> usize {
        self.cursor
    }

    /// Number of redo steps available.
    #[must_use]
    pub fn redo_levels(&self) -> usize {
        self.entries.len() - 1 - self.cursor
    }

    /// Number of retained entries, including the current one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history holds at least the current entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor position.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Maximum number of retained entries.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::create_default;
    use crate::BlockVariant;

    fn snapshot(n: usize) -> Vec<Block> {
        (0..n)
            .map(|_| create_default(BlockVariant::Paragraph))
            .collect()
    }

    #[test]
    fn test_history_creation() {
        let history = History::default();
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert!(history.current().is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_to_initial_state() {
        let mut history = History::default();
        history.push(snapshot(1));
        let restored = history.undo().expect("should undo");
        assert!(restored.is_empty());
        assert!(history.undo().is_none());
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_redo_after_undo() {
        let mut history = History::default();
        let one = snapshot(1);
        history.push(one.clone());
        history.undo();
        assert_eq!(history.redo().expect("should redo"), one.as_slice());
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_push_truncates_redo() {
        let mut history = History::default();
        history.push(snapshot(1));
        history.push(snapshot(2));
        history.undo();
        assert_eq!(history.redo_levels(), 1);

        history.push(snapshot(3));
        assert_eq!(history.redo_levels(), 0);
        assert!(history.redo().is_none());
        assert_eq!(history.len(), 3);
        assert_eq!(history.current().len(), 3);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = History::new(Vec::new(), 3);
        for n in 1..=5 {
            history.push(snapshot(n));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.undo().map(<[Block]>::len), Some(4));
        assert_eq!(history.undo().map(<[Block]>::len), Some(3));
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_zero_limit_keeps_current() {
        let mut history = History::new(Vec::new(), 0);
        history.push(snapshot(2));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current().len(), 2);
        assert!(!history.can_undo());
    }
}
