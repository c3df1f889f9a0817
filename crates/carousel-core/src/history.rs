//! Snapshot-based linear undo/redo log.

use crate::slide::Slide;
use std::collections::VecDeque;

/// Default maximum number of retained history entries.
pub const MAX_HISTORY: usize = 50;

/// A deep copy of the undoable part of the editor state.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub slides: Vec<Slide>,
    pub active_slide_index: usize,
}

/// Linear history over full snapshots.
///
/// `entries` holds the states recorded by checkpoints, oldest first. `head`
/// holds the live state captured by the first undo after a mutation, so redo
/// can return to it; it sits past the last entry and never counts against
/// `limit`. `index` is the cursor into `entries ++ [head]`. While
/// `head_pending` is set, the live state has moved past `index` and has not
/// been captured yet.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    head: Option<HistoryEntry>,
    index: Option<usize>,
    head_pending: bool,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(MAX_HISTORY)
    }
}

impl History {
    /// Create an empty history retaining at most `limit` entries (never fewer than 2).
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            head: None,
            index: None,
            head_pending: false,
            limit: limit.max(2),
        }
    }

    /// Record the state as it is before a mutation.
    ///
    /// Any redo branch beyond the cursor is discarded. When the cursor sits on
    /// a restored entry, that entry is refreshed with `entry` instead of
    /// duplicated, so silent edits made after an undo are kept.
    pub fn checkpoint(&mut self, entry: HistoryEntry) {
        self.head = None;
        match self.index {
            Some(index) if !self.head_pending && index < self.entries.len() => {
                self.entries.truncate(index + 1);
                self.entries[index] = entry;
            }
            Some(index) => {
                self.entries.truncate(index + 1);
                self.push(entry);
            }
            None => {
                self.entries.clear();
                self.push(entry);
            }
        }
        self.head_pending = true;
    }

    /// Step back one entry. `current` is called to capture the live state the
    /// first time an undo follows a mutation.
    pub fn undo(&mut self, current: impl FnOnce() -> HistoryEntry) -> Option<HistoryEntry> {
        let index = self.index?;
        let target = if self.head_pending {
            self.entries.truncate(index + 1);
            self.head = Some(current());
            self.head_pending = false;
            index
        } else {
            index.checked_sub(1)?
        };
        self.index = Some(target);
        self.entries.get(target).cloned()
    }

    /// Step forward one entry, if a redo branch exists.
    pub fn redo(&mut self) -> Option<HistoryEntry> {
        if !self.can_redo() {
            return None;
        }
        let target = self.index? + 1;
        self.index = Some(target);
        match self.entries.get(target) {
            Some(entry) => Some(entry.clone()),
            None => self.head.clone(),
        }
    }

    pub fn can_undo(&self) -> bool {
        match self.index {
            Some(_) if self.head_pending => true,
            Some(index) => index > 0,
            None => false,
        }
    }

    pub fn can_redo(&self) -> bool {
        match self.index {
            Some(_) if self.head_pending => false,
            Some(index) if index + 1 < self.entries.len() => true,
            Some(index) => index < self.entries.len() && self.head.is_some(),
            None => false,
        }
    }

    /// Number of retained checkpoint entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained entries.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Oldest retained entry.
    pub fn oldest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        self.index = Some(self.entries.len() - 1);
    }
}
