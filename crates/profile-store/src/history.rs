//! Bounded log of dispatched actions, for inspection while editing.

use std::collections::VecDeque;

use crate::action::Action;

/// One dispatched action.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Monotonic sequence number, starting at 1.
    pub sequence: u64,
    pub action: Action,
    /// Whether the action produced a new state.
    pub changed: bool,
    /// Field count after the action.
    pub field_count: usize,
}

/// Ring buffer of the most recent actions. Oldest entries are evicted first.
#[derive(Debug, Clone)]
pub struct ActionHistory {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
    next_sequence: u64,
}

impl ActionHistory {
    /// Create an empty history holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::new(),
            next_sequence: 1,
        }
    }

    /// Record an action.
    pub fn record(&mut self, action: &Action, changed: bool, field_count: usize) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            sequence,
            action: action.clone(),
            changed,
            field_count,
        });
    }

    /// Entries from oldest to newest.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Up to `n` entries, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev().take(n)
    }

    /// Total actions recorded, including evicted ones.
    pub fn total(&self) -> u64 {
        self.next_sequence - 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
