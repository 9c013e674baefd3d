//! Traits for validation and for the presentation-facing interface

use bigdecimal::BigDecimal;

use crate::types::*;

/// Trait for implementing custom entry validation rules
pub trait EntryValidator: Send + Sync {
    /// Validate an entry before it is added
    fn validate_entry(
        &self,
        kind: EntryKind,
        description: &str,
        value: &BigDecimal,
    ) -> LedgerResult<()>;
}

/// Default entry validator. Accepts everything; input checks belong to the caller.
pub struct DefaultEntryValidator;

impl EntryValidator for DefaultEntryValidator {
    fn validate_entry(
        &self,
        _kind: EntryKind,
        _description: &str,
        _value: &BigDecimal,
    ) -> LedgerResult<()> {
        Ok(())
    }
}

/// The operations a presentation layer drives the budget through
pub trait BudgetController {
    /// Add an income or expense and return it with its derived fields
    fn add_entry(&mut self, kind: EntryKind, description: String, value: BigDecimal) -> Entry;

    /// Remove an entry by id. Unknown ids are ignored.
    fn remove_entry(&mut self, id: u64, kind: EntryKind) -> Option<Entry>;

    /// Current aggregate figures
    fn get_totals(&self) -> Totals;

    /// Entries of one kind in display order
    fn get_entries(&self, kind: EntryKind) -> &[Entry];
}
