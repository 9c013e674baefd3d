//! Ledger module containing entry storage, totals, and the orchestrating ledger

pub mod core;
pub mod entries;
pub mod totals;

pub use self::core::*;
pub use entries::*;
pub use totals::*;
