//! Ordered log of the player's past moves.
//!
//! The log is append-only during a session and read-only for the
//! predictors. An optional FIFO capacity keeps only the most recent
//! entries, mirroring opponents that forget old patterns.

use crate::core::moves::Move;

/// Ordered sequence of past player moves, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<Move>,
    limit: Option<usize>,
}

impl HistoryLog {
    /// Create an unbounded log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log that retains only the most recent `limit` moves.
    #[must_use]
    pub fn capped(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Create a log with an optional cap.
    #[must_use]
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Rebuild a log from previously recorded entries, applying the cap.
    #[must_use]
    pub fn from_entries(entries: Vec<Move>, limit: Option<usize>) -> Self {
        let mut log = Self {
            entries: Vec::new(),
            limit,
        };
        for m in entries {
            log.record(m);
        }
        log
    }

    /// Append a move, evicting the oldest entry past the cap.
    pub fn record(&mut self, m: Move) {
        self.entries.push(m);
        if let Some(limit) = self.limit {
            // Caps are single digits in practice; front removal is fine.
            while self.entries.len() > limit {
                self.entries.remove(0);
            }
        }
    }

    /// The last `n` moves, oldest first.
    ///
    /// Returns an empty slice if fewer than `n` moves are retained.
    #[must_use]
    pub fn recent(&self, n: usize) -> &[Move] {
        if self.entries.len() < n {
            &[]
        } else {
            &self.entries[self.entries.len() - n..]
        }
    }

    /// The full retained sequence, oldest first.
    #[must_use]
    pub fn all(&self) -> &[Move] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured cap, if any.
    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Drop all retained entries, keeping the cap.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
