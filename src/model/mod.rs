//! Domain types for monthly ledgers and their entries.

pub mod amount;
mod ledger;
mod month;
mod transaction;

pub use ledger::MonthlyLedger;
pub use month::Month;
pub use month::LEDGER_YEAR;
pub use transaction::Kind;
pub use transaction::Transaction;
pub use transaction::INCOME_CATEGORY;
