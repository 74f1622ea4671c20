//! Business logic: the stateful [`ExpenseStore`] facade and stateless services.

pub mod clock;
pub mod expense_store;
pub mod services;

pub use clock::{Clock, FixedClock, SystemClock};
pub use expense_store::{ExpenseStore, LoadOutcome};
