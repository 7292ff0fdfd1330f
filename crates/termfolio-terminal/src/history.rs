//! Submitted-line history with readline-style recall.
//!
//! The cursor ranges over `0..=len`; `len` means "composing new input". When
//! recall starts, the uncommitted input is parked in a staging buffer and
//! handed back once navigation walks past the newest entry.

/// Ordered history of accepted input lines.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    entries: Vec<String>,
    cursor: usize,
    staged: String,
    capacity: Option<usize>,
}

impl HistoryBuffer {
    /// Create an unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that evicts its oldest entry beyond `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity.max(1)),
            ..Self::default()
        }
    }

    /// Record a submitted line and reset navigation.
    ///
    /// A line equal to the most recent entry is not recorded again.
    pub fn submit(&mut self, line: &str) {
        if self.entries.last().is_none_or(|last| last != line) {
            self.entries.push(line.to_string());
            if let Some(cap) = self.capacity
                && self.entries.len() > cap
            {
                self.entries.remove(0);
            }
        }
        self.cursor = self.entries.len();
        self.staged.clear();
    }

    /// Step back one entry. `current` is the text in the input field.
    ///
    /// Returns `None` when there is no history or when the oldest entry is
    /// already recalled; the input field is then left as it is.
    pub fn recall_previous(&mut self, current: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        if self.cursor == self.entries.len() {
            self.staged = current.to_string();
        }
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward one entry. Past the newest entry the staged input comes
    /// back and the cursor parks at `len()`.
    ///
    /// Returns `None` only when there is no history.
    pub fn recall_next(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            Some(&self.entries[self.cursor])
        } else {
            self.cursor = self.entries.len();
            Some(&self.staged)
        }
    }

    /// Recorded lines, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been submitted yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current recall position; equals `len()` while composing.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether recall navigation is in progress.
    pub fn is_navigating(&self) -> bool {
        self.cursor < self.entries.len()
    }
}
