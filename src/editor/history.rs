/// How far the buffer length must drift from the current snapshot
/// before [`EditHistory::maybe_record`] takes a new one.
pub const DEFAULT_COALESCE_THRESHOLD: usize = 10;

/// Linear undo/redo history over full-text snapshots.
///
/// Invariant: the cursor always points at a valid snapshot while the
/// list is non-empty. Recording while the cursor is behind the tail
/// discards the forward branch first, so there is no redo after a new
/// edit.
#[derive(Debug, Clone, Default)]
pub struct EditHistory {
    snapshots: Vec<String>,
    cursor: usize,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot, pruning any snapshots past the cursor.
    pub fn record(&mut self, text: impl Into<String>) {
        if !self.snapshots.is_empty() && self.cursor < self.snapshots.len() - 1 {
            self.snapshots.truncate(self.cursor + 1);
        }
        self.snapshots.push(text.into());
        self.cursor = self.snapshots.len() - 1;
    }

    /// Record only when the buffer length has drifted more than
    /// `threshold` from the current snapshot. Keeps per-keystroke
    /// edits from flooding the history. Returns whether a snapshot
    /// was taken.
    pub fn maybe_record(&mut self, text: &str, threshold: usize) -> bool {
        match self.current() {
            Some(current) if text.len().abs_diff(current.len()) <= threshold => false,
            _ => {
                self.record(text);
                true
            }
        }
    }

    /// Step back one snapshot. No-op at the first snapshot or when
    /// the history is empty.
    pub fn undo(&mut self) -> Option<&str> {
        if self.snapshots.is_empty() || self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Step forward one snapshot. No-op at the tail.
    pub fn redo(&mut self) -> Option<&str> {
        if self.snapshots.is_empty() || self.cursor >= self.snapshots.len() - 1 {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Snapshot under the cursor, if any.
    pub fn current(&self) -> Option<&str> {
        self.snapshots.get(self.cursor).map(String::as_str)
    }

    /// Discard everything and start over from a single snapshot.
    pub fn reset(&mut self, text: impl Into<String>) {
        self.snapshots.clear();
        self.snapshots.push(text.into());
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_then_undo_returns_prior_snapshot() {
        let mut history = EditHistory::new();
        history.record("one");
        history.record("two");

        assert_eq!(history.undo(), Some("one"));
        assert_eq!(history.current(), Some("one"));
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let mut history = EditHistory::new();
        assert_eq!(history.undo(), None);

        history.record("only");
        assert_eq!(history.undo(), None);
        assert_eq!(history.current(), Some("only"));
    }

    #[test]
    fn test_redo_at_tail_is_noop() {
        let mut history = EditHistory::new();
        history.record("one");
        history.record("two");

        assert_eq!(history.redo(), None);
        assert_eq!(history.current(), Some("two"));
    }

    #[test]
    fn test_redo_after_record_requires_undo_first() {
        let mut history = EditHistory::new();
        history.record("one");
        assert_eq!(history.redo(), None);
        history.record("two");
        assert_eq!(history.redo(), None);

        history.undo();
        assert_eq!(history.redo(), Some("two"));
    }

    #[test]
    fn test_new_record_prunes_redo_branch() {
        let mut history = EditHistory::new();
        history.record("base");
        history.record("A");
        history.record("B");

        history.undo();
        history.record("C");

        // B is gone: the sequence is now [base, A, C]
        assert_eq!(history.len(), 3);
        assert_eq!(history.current(), Some("C"));
        assert_eq!(history.undo(), Some("A"));
        assert_eq!(history.undo(), Some("base"));
        assert_eq!(history.redo(), Some("A"));
        assert_eq!(history.redo(), Some("C"));
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn test_maybe_record_coalesces_small_deltas() {
        let mut history = EditHistory::new();

        // First snapshot always records
        assert!(history.maybe_record("hello", DEFAULT_COALESCE_THRESHOLD));
        // Small drift is coalesced away
        assert!(!history.maybe_record("hello wor", DEFAULT_COALESCE_THRESHOLD));
        assert_eq!(history.len(), 1);
        // Large drift records
        assert!(history.maybe_record(
            "hello world, this grew a lot",
            DEFAULT_COALESCE_THRESHOLD
        ));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_reset_discards_history() {
        let mut history = EditHistory::new();
        history.record("one");
        history.record("two");

        history.reset("");
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), Some(""));
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
    }
}
