//! Ordered storage for one kind of entry

use bigdecimal::BigDecimal;
use serde::Serialize;

use crate::ledger::totals::compute_expense_percent;
use crate::types::*;

/// Entries of a single kind in insertion order, plus the id counter for that kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryList {
    kind: EntryKind,
    entries: Vec<Entry>,
    next_id: u64,
}

impl EntryList {
    /// Create an empty list for the given kind
    pub fn new(kind: EntryKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            next_id: 0,
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Append a new entry and return a reference to it.
    ///
    /// Ids only move forward, so an id freed by `remove` is never handed out again.
    pub fn push(&mut self, description: String, value: BigDecimal) -> &mut Entry {
        let id = self.next_id;
        self.next_id += 1;
        self.entries
            .push(Entry::new(id, self.kind, description, value));
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    /// Remove the entry with the given id, if present
    pub fn remove(&mut self, id: u64) -> Option<Entry> {
        let position = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(position))
    }

    pub fn get(&self, id: u64) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every entry value
    pub fn total(&self) -> BigDecimal {
        self.entries.iter().map(|e| &e.value).sum()
    }

    /// Re-derive each expense's share of `total_income`. Income lists are left alone.
    pub fn refresh_percentages(&mut self, total_income: &BigDecimal) {
        if self.kind != EntryKind::Expense {
            return;
        }
        for entry in &mut self.entries {
            entry.percent_of_income = compute_expense_percent(&entry.value, total_income);
        }
    }
}
