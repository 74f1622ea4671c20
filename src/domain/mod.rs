//! Pure domain models: categories, expenses and the ledger that holds them.
//! No I/O, no CLI, no storage.

pub mod category;
pub mod expense;
pub mod ledger;

pub use category::Category;
pub use expense::{format_date, parse_date, Expense, ExpenseDraft, DATE_FORMAT, DEFAULT_DESCRIPTION};
pub use ledger::{BudgetLimits, ExpenseLedger};
