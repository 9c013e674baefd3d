//! Validation utilities

use crate::traits::*;
use crate::types::*;
use bigdecimal::BigDecimal;

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: &BigDecimal) -> LedgerResult<()> {
    if *amount <= BigDecimal::from(0) {
        Err(LedgerError::Validation(
            "Amount must be positive".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validate that an entry description is valid
pub fn validate_description(description: &str) -> LedgerResult<()> {
    if description.trim().is_empty() {
        return Err(LedgerError::Validation(
            "Entry description cannot be empty".to_string(),
        ));
    }

    if description.chars().count() > 500 {
        return Err(LedgerError::Validation(
            "Entry description cannot exceed 500 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validator for adapters that want the ledger to reject bad input itself
pub struct StrictEntryValidator;

impl EntryValidator for StrictEntryValidator {
    fn validate_entry(
        &self,
        _kind: EntryKind,
        description: &str,
        value: &BigDecimal,
    ) -> LedgerResult<()> {
        validate_description(description)?;
        validate_positive_amount(value)?;
        Ok(())
    }
}
