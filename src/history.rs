// src/history.rs
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{HistoryEntry, StrengthTier};

/// Most recent passwords kept per session.
pub const HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Password not found in history")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, HistoryError>;

/// Bounded, deduplicated record of generated passwords, most recent first.
///
/// Owned by a single session; `record` is the only mutation path, so the
/// capacity and uniqueness invariants are enforced in one place.
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    pub fn new() -> Self {
        HistoryStore {
            entries: Vec::new(),
        }
    }

    /// Record a freshly generated password. Returns false without touching
    /// the store when the password is empty or already present (first-seen
    /// wins; a duplicate does not refresh recency or timestamp). Otherwise
    /// inserts at the head and evicts the oldest entry once over capacity.
    pub fn record(&mut self, password: &str, strength: StrengthTier, now: DateTime<Utc>) -> bool {
        if password.is_empty() {
            return false;
        }
        if self.entries.iter().any(|entry| entry.password == password) {
            log::debug!("duplicate password skipped, history unchanged");
            return false;
        }

        self.entries.insert(
            0,
            HistoryEntry {
                password: password.to_string(),
                created_at: now,
                strength,
            },
        );
        if self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop();
        }
        true
    }

    /// Entries most-recent-first.
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Look up a previously recorded password, e.g. to reuse it as the
    /// current one. Read-only; never reorders history.
    pub fn select(&self, password: &str) -> Result<&HistoryEntry> {
        self.entries
            .iter()
            .find(|entry| entry.password == password)
            .ok_or(HistoryError::NotFound)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
