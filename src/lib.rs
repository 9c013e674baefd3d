//! # Budget Core
//!
//! The computation and state layer behind a budgeting widget: income and
//! expense line items, running totals, and each expense's share of income.
//!
//! ## Features
//!
//! - **Entry tracking**: Ordered income and expense lists with per-kind ids that are never reused
//! - **Running totals**: Total income, total expense, and net budget kept in step on every change
//! - **Income percentages**: Every expense carries its share of the current total income
//! - **Pluggable validation**: Opt-in validators for adapters that want the ledger to reject input
//!
//! ## Quick Start
//!
//! ```rust
//! use budget_core::{EntryKind, Ledger};
//! use bigdecimal::BigDecimal;
//!
//! let mut ledger = Ledger::new();
//! ledger.add_entry(EntryKind::Income, "salary", BigDecimal::from(1000));
//! let rent = ledger.add_entry(EntryKind::Expense, "rent", BigDecimal::from(300));
//!
//! assert_eq!(rent.percent_of_income, Some(30));
//! assert_eq!(ledger.get_totals().net_budget, BigDecimal::from(700));
//! ```

pub mod ledger;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use ledger::*;
pub use traits::*;
pub use types::*;
