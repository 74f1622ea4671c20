use std::io;

use thiserror::Error;

use crate::cli::commands::{budget, expense, report};
use crate::cli::console::Console;
use crate::cli::menus::MenuAction;
use crate::config::TrackerConfig;
use crate::core::{Clock, ExpenseStore, LoadOutcome};
use crate::errors::ExpenseError;
use crate::storage::{JsonStorage, StorageBackend};

/// Failures surfaced by the interactive loop.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] ExpenseError),
    #[error("console error: {0}")]
    Io(#[from] io::Error),
    #[error("input ended")]
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Session state shared by every menu command.
pub struct ShellContext<C: Console> {
    pub(crate) store: ExpenseStore,
    pub(crate) console: C,
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) config: TrackerConfig,
    load_outcome: Option<LoadOutcome>,
}

impl<C: Console> ShellContext<C> {
    pub fn new(
        config: TrackerConfig,
        console: C,
        storage: Box<dyn StorageBackend>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let (store, outcome) = ExpenseStore::open(storage);
        Self {
            store,
            console,
            clock,
            config,
            load_outcome: Some(outcome),
        }
    }

    /// Opens the JSON document named by `config.data_file`.
    pub fn with_json_storage(config: TrackerConfig, console: C, clock: Box<dyn Clock>) -> Self {
        let storage = JsonStorage::new(config.data_file.clone());
        Self::new(config, console, Box::new(storage), clock)
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Prints what the initial load found. Only the first call prints anything.
    pub fn report_load(&mut self) {
        let Some(outcome) = self.load_outcome.take() else {
            return;
        };
        match outcome {
            LoadOutcome::Fresh => self.console.info("Starting new expense tracker"),
            LoadOutcome::Loaded { expenses } => self
                .console
                .success(format!("Loaded {expenses} expenses from file")),
            LoadOutcome::Recovered { reason, preserved } => {
                self.console
                    .warning(format!("Error reading file, starting fresh ({reason})"));
                if let Some(copy) = preserved {
                    self.console
                        .info(format!("The unreadable file was copied to {}", copy.display()));
                }
            }
        }
    }

    pub fn report_error(&mut self, err: &CliError) {
        self.console.error(err);
    }

    pub fn farewell(&mut self) {
        self.console.success("Thank you for using Expense Tracker!");
        self.console.info("All data saved. Goodbye!");
    }

    pub fn dispatch(&mut self, action: MenuAction) -> Result<LoopControl, CliError> {
        tracing::debug!(?action, "dispatching menu action");
        match action {
            MenuAction::AddExpense => expense::add_expense(self),
            MenuAction::ViewAll => report::view_all(self),
            MenuAction::ViewByCategory => report::view_by_category(self),
            MenuAction::MonthlySummary => report::monthly_summary(self),
            MenuAction::SearchByDate => report::search_by_date(self),
            MenuAction::SetBudget => budget::set_budget(self),
            MenuAction::DeleteExpense => expense::delete_expense(self),
            MenuAction::Exit => {
                self.farewell();
                Ok(LoopControl::Exit)
            }
        }
    }
}
