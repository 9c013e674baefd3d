//! Percentage math and aggregate totals

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};

use crate::types::*;

/// Share of `total_income` that `value` represents, rounded to a whole percent.
///
/// Returns `None` when there is no income to divide by, or when the rounded
/// percentage does not fit in an `i64`. Halves round away from zero.
pub fn compute_expense_percent(value: &BigDecimal, total_income: &BigDecimal) -> Option<i64> {
    if *total_income <= BigDecimal::from(0) {
        return None;
    }

    let scaled = value * &BigDecimal::from(100);
    let ratio = &scaled / total_income;
    ratio.with_scale_round(0, RoundingMode::HalfUp).to_i64()
}

impl Totals {
    /// Recompute every figure from scratch
    pub fn from_entries(income: &[Entry], expenses: &[Entry]) -> Self {
        let mut totals = Self {
            total_income: income.iter().map(|e| &e.value).sum(),
            total_expense: expenses.iter().map(|e| &e.value).sum(),
            ..Self::default()
        };
        totals.refresh_derived();
        totals
    }

    /// Fold a single new entry into the running totals
    pub fn apply(&mut self, kind: EntryKind, value: &BigDecimal) {
        match kind {
            EntryKind::Income => self.total_income += value,
            EntryKind::Expense => self.total_expense += value,
        }
        self.refresh_derived();
    }

    fn refresh_derived(&mut self) {
        self.net_budget = &self.total_income - &self.total_expense;
        self.expense_percent_of_income =
            compute_expense_percent(&self.total_expense, &self.total_income);
    }
}
