//! Main ledger orchestrator that keeps entries and totals in step

use bigdecimal::BigDecimal;

use crate::ledger::totals::compute_expense_percent;
use crate::ledger::EntryList;
use crate::traits::*;
use crate::types::*;

/// Budget ledger owning every income and expense entry and the derived totals
pub struct Ledger {
    income: EntryList,
    expenses: EntryList,
    totals: Totals,
    validator: Box<dyn EntryValidator>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger that accepts any input
    pub fn new() -> Self {
        Self::with_validator(Box::new(DefaultEntryValidator))
    }

    /// Create an empty ledger whose `try_add_entry` runs the given validator
    pub fn with_validator(validator: Box<dyn EntryValidator>) -> Self {
        Self {
            income: EntryList::new(EntryKind::Income),
            expenses: EntryList::new(EntryKind::Expense),
            totals: Totals::default(),
            validator,
        }
    }

    /// Add an entry and return it with its derived fields.
    ///
    /// No validation happens here. An expense's percentage is taken against the
    /// income present at insertion time; adding income re-derives every expense.
    pub fn add_entry(
        &mut self,
        kind: EntryKind,
        description: impl Into<String>,
        value: BigDecimal,
    ) -> Entry {
        let entry = match kind {
            EntryKind::Income => self.income.push(description.into(), value).clone(),
            EntryKind::Expense => {
                let entry = self.expenses.push(description.into(), value);
                entry.percent_of_income =
                    compute_expense_percent(&entry.value, &self.totals.total_income);
                entry.clone()
            }
        };

        self.totals.apply(kind, &entry.value);
        if kind == EntryKind::Income {
            self.refresh_expense_percentages();
        }

        tracing::debug!(id = entry.id, kind = %kind, value = %entry.value, "added budget entry");
        entry
    }

    /// Validate with the configured validator, then add
    pub fn try_add_entry(
        &mut self,
        kind: EntryKind,
        description: impl Into<String>,
        value: BigDecimal,
    ) -> LedgerResult<Entry> {
        let description = description.into();
        self.validator.validate_entry(kind, &description, &value)?;
        Ok(self.add_entry(kind, description, value))
    }

    /// Remove an entry by id and kind.
    ///
    /// Unknown ids are a silent no-op. Any removal recomputes totals from the
    /// remaining entries and re-derives every expense percentage.
    pub fn remove_entry(&mut self, id: u64, kind: EntryKind) -> Option<Entry> {
        let Some(removed) = self.list_mut(kind).remove(id) else {
            tracing::debug!(id, kind = %kind, "no budget entry to remove");
            return None;
        };

        self.recalculate();

        tracing::debug!(id, kind = %kind, "removed budget entry");
        Some(removed)
    }

    /// Current aggregate figures
    pub fn get_totals(&self) -> Totals {
        self.totals.clone()
    }

    /// Entries of one kind in insertion order
    pub fn get_entries(&self, kind: EntryKind) -> &[Entry] {
        self.list(kind).as_slice()
    }

    /// Look up a single entry
    pub fn get_entry(&self, id: u64, kind: EntryKind) -> Option<&Entry> {
        self.list(kind).get(id)
    }

    /// Snapshot of totals and both entry lists
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary {
            totals: self.get_totals(),
            income: self.income.as_slice().to_vec(),
            expenses: self.expenses.as_slice().to_vec(),
        }
    }

    /// Number of entries across both kinds
    pub fn len(&self) -> usize {
        self.income.len() + self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }

    fn list(&self, kind: EntryKind) -> &EntryList {
        match kind {
            EntryKind::Income => &self.income,
            EntryKind::Expense => &self.expenses,
        }
    }

    fn list_mut(&mut self, kind: EntryKind) -> &mut EntryList {
        match kind {
            EntryKind::Income => &mut self.income,
            EntryKind::Expense => &mut self.expenses,
        }
    }

    fn recalculate(&mut self) {
        self.totals = Totals::from_entries(self.income.as_slice(), self.expenses.as_slice());
        self.refresh_expense_percentages();
    }

    fn refresh_expense_percentages(&mut self) {
        self.expenses.refresh_percentages(&self.totals.total_income);
        tracing::trace!(
            expenses = self.expenses.len(),
            total_income = %self.totals.total_income,
            "refreshed expense percentages"
        );
    }
}

impl BudgetController for Ledger {
    fn add_entry(&mut self, kind: EntryKind, description: String, value: BigDecimal) -> Entry {
        Ledger::add_entry(self, kind, description, value)
    }

    fn remove_entry(&mut self, id: u64, kind: EntryKind) -> Option<Entry> {
        Ledger::remove_entry(self, id, kind)
    }

    fn get_totals(&self) -> Totals {
        Ledger::get_totals(self)
    }

    fn get_entries(&self, kind: EntryKind) -> &[Entry] {
        Ledger::get_entries(self, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::StrictEntryValidator;

    fn percents(ledger: &Ledger) -> Vec<Option<i64>> {
        ledger
            .get_entries(EntryKind::Expense)
            .iter()
            .map(|e| e.percent_of_income)
            .collect()
    }

    #[test]
    fn test_income_then_expense() {
        let mut ledger = Ledger::new();

        let salary = ledger.add_entry(EntryKind::Income, "salary", BigDecimal::from(1000));
        assert_eq!(salary.id, 0);
        assert_eq!(salary.percent_of_income, None);

        let totals = ledger.get_totals();
        assert_eq!(totals.total_income, BigDecimal::from(1000));
        assert_eq!(totals.total_expense, BigDecimal::from(0));
        assert_eq!(totals.net_budget, BigDecimal::from(1000));
        assert_eq!(totals.expense_percent_of_income, None);

        let rent = ledger.add_entry(EntryKind::Expense, "rent", BigDecimal::from(300));
        assert_eq!(rent.percent_of_income, Some(30));

        let totals = ledger.get_totals();
        assert_eq!(totals.total_income, BigDecimal::from(1000));
        assert_eq!(totals.total_expense, BigDecimal::from(300));
        assert_eq!(totals.net_budget, BigDecimal::from(700));
        assert_eq!(totals.expense_percent_of_income, Some(30));
    }

    #[test]
    fn test_expense_without_income() {
        let mut ledger = Ledger::new();

        let food = ledger.add_entry(EntryKind::Expense, "food", BigDecimal::from(50));
        assert_eq!(food.percent_of_income, None);
        assert_eq!(ledger.get_totals().expense_percent_of_income, None);
        assert_eq!(ledger.get_totals().net_budget, BigDecimal::from(-50));
    }

    #[test]
    fn test_income_refreshes_existing_expenses() {
        let mut ledger = Ledger::new();
        ledger.add_entry(EntryKind::Expense, "rent", BigDecimal::from(300));
        ledger.add_entry(EntryKind::Expense, "food", BigDecimal::from(125));
        assert_eq!(percents(&ledger), vec![None, None]);

        ledger.add_entry(EntryKind::Income, "salary", BigDecimal::from(1000));
        assert_eq!(percents(&ledger), vec![Some(30), Some(13)]);

        ledger.add_entry(EntryKind::Income, "side job", BigDecimal::from(500));
        assert_eq!(percents(&ledger), vec![Some(20), Some(8)]);
    }

    #[test]
    fn test_removing_income_resets_percentages() {
        let mut ledger = Ledger::new();
        let salary = ledger.add_entry(EntryKind::Income, "salary", BigDecimal::from(1000));
        ledger.add_entry(EntryKind::Expense, "rent", BigDecimal::from(300));
        ledger.add_entry(EntryKind::Expense, "food", BigDecimal::from(200));

        let removed = ledger.remove_entry(salary.id, EntryKind::Income).unwrap();
        assert_eq!(removed.description, "salary");

        assert_eq!(percents(&ledger), vec![None, None]);
        let totals = ledger.get_totals();
        assert_eq!(totals.total_income, BigDecimal::from(0));
        assert_eq!(totals.total_expense, BigDecimal::from(500));
        assert_eq!(totals.net_budget, BigDecimal::from(-500));
        assert_eq!(totals.expense_percent_of_income, None);
    }

    #[test]
    fn test_removing_expense_recomputes_totals() {
        let mut ledger = Ledger::new();
        ledger.add_entry(EntryKind::Income, "salary", BigDecimal::from(2000));
        let rent = ledger.add_entry(EntryKind::Expense, "rent", BigDecimal::from(800));
        ledger.add_entry(EntryKind::Expense, "food", BigDecimal::from(300));

        ledger.remove_entry(rent.id, EntryKind::Expense);

        let totals = ledger.get_totals();
        assert_eq!(totals.total_expense, BigDecimal::from(300));
        assert_eq!(totals.net_budget, BigDecimal::from(1700));
        assert_eq!(totals.expense_percent_of_income, Some(15));
        assert_eq!(percents(&ledger), vec![Some(15)]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut ledger = Ledger::new();
        ledger.add_entry(EntryKind::Income, "salary", BigDecimal::from(1000));

        assert!(ledger.remove_entry(7, EntryKind::Income).is_none());
        // id 0 exists only as income
        assert!(ledger.remove_entry(0, EntryKind::Expense).is_none());

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get_totals().total_income, BigDecimal::from(1000));
    }

    #[test]
    fn test_ids_are_per_kind_and_never_reused() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.add_entry(EntryKind::Income, "a", BigDecimal::from(1)).id, 0);
        assert_eq!(ledger.add_entry(EntryKind::Income, "b", BigDecimal::from(1)).id, 1);
        assert_eq!(ledger.add_entry(EntryKind::Expense, "c", BigDecimal::from(1)).id, 0);

        ledger.remove_entry(0, EntryKind::Income);
        assert_eq!(ledger.add_entry(EntryKind::Income, "d", BigDecimal::from(1)).id, 2);

        ledger.remove_entry(2, EntryKind::Income);
        assert_eq!(ledger.add_entry(EntryKind::Income, "e", BigDecimal::from(1)).id, 3);
    }

    #[test]
    fn test_try_add_entry_uses_validator() {
        let mut permissive = Ledger::new();
        assert!(permissive
            .try_add_entry(EntryKind::Expense, "", BigDecimal::from(0))
            .is_ok());

        let mut strict = Ledger::with_validator(Box::new(StrictEntryValidator));
        let result = strict.try_add_entry(EntryKind::Expense, "", BigDecimal::from(10));
        assert!(matches!(result, Err(LedgerError::Validation(_))));
        assert!(strict.is_empty());

        let entry = strict
            .try_add_entry(EntryKind::Income, "salary", BigDecimal::from(10))
            .unwrap();
        assert_eq!(entry.id, 0);
        assert_eq!(strict.len(), 1);
    }

    #[test]
    fn test_get_entry_reflects_current_percentage() {
        let mut ledger = Ledger::new();
        let rent = ledger.add_entry(EntryKind::Expense, "rent", BigDecimal::from(250));
        assert_eq!(rent.percent_of_income, None);

        ledger.add_entry(EntryKind::Income, "salary", BigDecimal::from(1000));

        let stored = ledger.get_entry(rent.id, EntryKind::Expense).unwrap();
        assert_eq!(stored.percent_of_income, Some(25));
        assert!(ledger.get_entry(rent.id + 1, EntryKind::Expense).is_none());
    }

    #[test]
    fn test_summary_snapshot() {
        let mut ledger = Ledger::new();
        ledger.add_entry(EntryKind::Income, "salary", BigDecimal::from(1000));
        ledger.add_entry(EntryKind::Expense, "rent", BigDecimal::from(300));

        let summary = ledger.summary();
        assert_eq!(summary.totals, ledger.get_totals());
        assert_eq!(summary.income.len(), 1);
        assert_eq!(summary.expenses.len(), 1);
        assert_eq!(summary.expenses[0].percent_of_income, Some(30));
    }
}
