use std::path::{Path, PathBuf};

use crate::core::services::{BudgetAlert, BudgetService};
use crate::domain::{BudgetLimits, Category, Expense, ExpenseDraft, ExpenseLedger};
use crate::errors::Result;
use crate::storage::StorageBackend;

/// What [`ExpenseStore::open`] found on disk.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// No document yet; the store starts empty.
    Fresh,
    Loaded { expenses: usize },
    /// The document could not be read; the store starts empty.
    Recovered {
        reason: String,
        preserved: Option<PathBuf>,
    },
}

/// Owns the in-memory ledger and writes it back after every mutation.
pub struct ExpenseStore {
    ledger: ExpenseLedger,
    storage: Box<dyn StorageBackend>,
}

impl ExpenseStore {
    /// Loads the ledger from `storage`. Never fails: unreadable documents are
    /// reported through [`LoadOutcome::Recovered`] and replaced by an empty ledger.
    pub fn open(storage: Box<dyn StorageBackend>) -> (Self, LoadOutcome) {
        let (ledger, outcome) = match storage.load() {
            Ok(Some(ledger)) => {
                let expenses = ledger.len();
                tracing::info!(
                    path = %storage.location().display(),
                    expenses,
                    "loaded expense ledger"
                );
                (ledger, LoadOutcome::Loaded { expenses })
            }
            Ok(None) => {
                tracing::info!(path = %storage.location().display(), "starting new ledger");
                (ExpenseLedger::new(), LoadOutcome::Fresh)
            }
            Err(err) => {
                tracing::warn!(
                    path = %storage.location().display(),
                    error = %err,
                    "unreadable ledger, starting fresh"
                );
                let preserved = match storage.preserve_unreadable() {
                    Ok(copy) => copy,
                    Err(copy_err) => {
                        tracing::warn!(error = %copy_err, "could not preserve unreadable ledger");
                        None
                    }
                };
                let outcome = LoadOutcome::Recovered {
                    reason: err.to_string(),
                    preserved,
                };
                (ExpenseLedger::new(), outcome)
            }
        };
        (Self { ledger, storage }, outcome)
    }

    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.ledger.expenses
    }

    pub fn budgets(&self) -> &BudgetLimits {
        &self.ledger.budgets
    }

    pub fn expense(&self, id: u32) -> Option<&Expense> {
        self.ledger.expense(id)
    }

    pub fn location(&self) -> &Path {
        self.storage.location()
    }

    /// Appends the expense, persists, then evaluates the category budget.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> Result<(Expense, Option<BudgetAlert>)> {
        let expense = self.ledger.add_expense(draft).clone();
        tracing::debug!(id = expense.id, category = %expense.category, "expense added");
        self.persist()?;
        let alert = BudgetService::check(&self.ledger, expense.category);
        Ok((expense, alert))
    }

    /// Removes the first expense with `id` and persists.
    pub fn delete_expense(&mut self, id: u32) -> Result<Expense> {
        let removed = self.ledger.remove_expense(id)?;
        tracing::debug!(id, "expense deleted");
        self.persist()?;
        Ok(removed)
    }

    /// Sets or replaces a category limit and persists.
    pub fn set_budget(&mut self, category: Category, limit: f64) -> Result<()> {
        self.ledger.set_budget(category, limit)?;
        tracing::debug!(%category, limit, "budget limit set");
        self.persist()
    }

    pub fn persist(&self) -> Result<()> {
        self.storage.save(&self.ledger)
    }
}
