pub mod budget_service;
pub mod summary_service;

pub use budget_service::{BudgetAlert, BudgetService, ALERT_RATIO};
pub use summary_service::{
    CategoryBreakdown, CategoryShare, ExpenseListing, MonthlySummary, SummaryService,
};
