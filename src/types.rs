//! Core types and data structures for the budget ledger

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of budget line items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money coming in (salary, sales, refunds)
    Income,
    /// Money going out (rent, food, subscriptions)
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "inc" => Some(EntryKind::Income),
            "expense" | "exp" => Some(EntryKind::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single income or expense line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Identifier, unique within the entry's kind
    pub id: u64,
    /// What the money was for
    pub description: String,
    /// Amount of the entry
    pub value: BigDecimal,
    /// Income or expense
    pub kind: EntryKind,
    /// Share of total income, rounded to a whole percent.
    ///
    /// Only expenses carry a percentage. `None` when total income is zero.
    pub percent_of_income: Option<i64>,
    /// When the entry was added
    pub created_at: NaiveDateTime,
}

impl Entry {
    /// Create a new entry with no derived percentage
    pub fn new(id: u64, kind: EntryKind, description: String, value: BigDecimal) -> Self {
        Self {
            id,
            description,
            value,
            kind,
            percent_of_income: None,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }
}

/// Aggregate figures derived from every entry in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all income entries
    pub total_income: BigDecimal,
    /// Sum of all expense entries
    pub total_expense: BigDecimal,
    /// Always `total_income - total_expense`
    pub net_budget: BigDecimal,
    /// Total expense as a rounded percentage of total income, `None` without income
    pub expense_percent_of_income: Option<i64>,
}

impl Default for Totals {
    fn default() -> Self {
        Self {
            total_income: BigDecimal::from(0),
            total_expense: BigDecimal::from(0),
            net_budget: BigDecimal::from(0),
            expense_percent_of_income: None,
        }
    }
}

/// Snapshot of the whole ledger for rendering in one pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub totals: Totals,
    pub income: Vec<Entry>,
    pub expenses: Vec<Entry>,
}

/// Errors that can occur in the ledger system
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
