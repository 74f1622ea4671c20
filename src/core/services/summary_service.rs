//! Read-only views over the ledger: listings, category breakdowns, monthly
//! summaries and date-range searches. Nothing here mutates state.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{Category, Expense, ExpenseLedger};

/// Expenses in insertion order with their combined amount.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseListing<'a> {
    pub expenses: Vec<&'a Expense>,
    pub total: f64,
}

impl<'a> ExpenseListing<'a> {
    fn collect(expenses: impl Iterator<Item = &'a Expense>) -> Self {
        let expenses: Vec<&Expense> = expenses.collect();
        let total = expenses.iter().map(|expense| expense.amount).sum();
        Self { expenses, total }
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub amount: f64,
    /// Percentage of the enclosing total, `0..=100`.
    pub percentage: f64,
}

impl CategoryShare {
    /// Glyph count for the proportional bar: one glyph per two percent.
    pub fn bar_width(&self) -> usize {
        (self.percentage / 2.0).floor() as usize
    }
}

/// Per-category sums over the categories that have expenses, sorted by label.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub shares: Vec<CategoryShare>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: String,
    pub count: usize,
    pub total: f64,
    pub average: f64,
    pub shares: Vec<CategoryShare>,
}

pub struct SummaryService;

impl SummaryService {
    pub fn list_all(ledger: &ExpenseLedger) -> ExpenseListing<'_> {
        ExpenseListing::collect(ledger.expenses.iter())
    }

    pub fn by_category(ledger: &ExpenseLedger) -> CategoryBreakdown {
        breakdown(ledger.expenses.iter())
    }

    /// Summarizes expenses whose `DD-MM-YYYY` text ends with `month`.
    ///
    /// The comparison is a plain suffix match, so `month` is expected in
    /// `MM-YYYY` form. Returns `None` when nothing matches.
    pub fn monthly(ledger: &ExpenseLedger, month: &str) -> Option<MonthlySummary> {
        let month = month.trim();
        let selected: Vec<&Expense> = ledger
            .expenses
            .iter()
            .filter(|expense| expense.date_text().ends_with(month))
            .collect();
        if selected.is_empty() {
            return None;
        }
        let count = selected.len();
        let CategoryBreakdown { shares, total } = breakdown(selected.into_iter());
        Some(MonthlySummary {
            month: month.to_string(),
            count,
            total,
            average: total / count as f64,
            shares,
        })
    }

    /// Expenses dated within `start..=end`. Bounds are not swapped, so
    /// `start > end` selects nothing.
    pub fn search_range(
        ledger: &ExpenseLedger,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ExpenseListing<'_> {
        ExpenseListing::collect(
            ledger
                .expenses
                .iter()
                .filter(|expense| start <= expense.date && expense.date <= end),
        )
    }
}

fn breakdown<'a>(expenses: impl Iterator<Item = &'a Expense>) -> CategoryBreakdown {
    let mut sums: BTreeMap<&'static str, (Category, f64)> = BTreeMap::new();
    for expense in expenses {
        let entry = sums
            .entry(expense.category.label())
            .or_insert((expense.category, 0.0));
        entry.1 += expense.amount;
    }
    let total: f64 = sums.values().map(|(_, amount)| amount).sum();
    let shares = sums
        .into_values()
        .map(|(category, amount)| CategoryShare {
            category,
            amount,
            percentage: if total > 0.0 {
                amount * 100.0 / total
            } else {
                0.0
            },
        })
        .collect();
    CategoryBreakdown { shares, total }
}
