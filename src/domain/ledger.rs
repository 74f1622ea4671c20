use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{expense::validate_amount, Category, Expense, ExpenseDraft};
use crate::errors::{ExpenseError, Result};

/// Per-category spending ceilings. A missing entry means no limit.
pub type BudgetLimits = BTreeMap<Category, f64>;

/// Ordered expenses plus budget limits; this is the persisted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLedger {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub budgets: BudgetLimits,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for the next expense: current count plus one.
    ///
    /// Ids are never renumbered, so after a deletion this can repeat an id that
    /// is still present.
    pub fn next_id(&self) -> u32 {
        u32::try_from(self.expenses.len()).map_or(u32::MAX, |count| count.saturating_add(1))
    }

    /// Appends a new expense and returns a reference to it.
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> &Expense {
        let expense = Expense::from_draft(self.next_id(), draft);
        self.expenses.push(expense);
        &self.expenses[self.expenses.len() - 1]
    }

    /// First expense carrying `id`, in insertion order.
    pub fn expense(&self, id: u32) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    /// Removes the first expense carrying `id`.
    pub fn remove_expense(&mut self, id: u32) -> Result<Expense> {
        let position = self
            .expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(ExpenseError::NotFound(id))?;
        Ok(self.expenses.remove(position))
    }

    pub fn budget_limit(&self, category: Category) -> Option<f64> {
        self.budgets.get(&category).copied()
    }

    /// Sets or replaces the limit for `category`.
    pub fn set_budget(&mut self, category: Category, limit: f64) -> Result<()> {
        validate_limit(limit)?;
        self.budgets.insert(category, limit);
        Ok(())
    }

    /// All-time spending in `category`.
    pub fn category_total(&self, category: Category) -> f64 {
        self.expenses
            .iter()
            .filter(|expense| expense.category == category)
            .map(|expense| expense.amount)
            .sum()
    }

    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Checks invariants that serde cannot express: positive amounts and
    /// non-negative limits.
    pub fn validate(&self) -> Result<()> {
        for expense in &self.expenses {
            validate_amount(expense.amount).map_err(|_| {
                ExpenseError::Validation(format!(
                    "expense {} has non-positive amount {}",
                    expense.id, expense.amount
                ))
            })?;
        }
        for (category, limit) in &self.budgets {
            validate_limit(*limit).map_err(|_| {
                ExpenseError::Validation(format!("budget for {category} is negative ({limit})"))
            })?;
        }
        Ok(())
    }
}

/// Budget limits may be zero but never negative.
pub fn validate_limit(limit: f64) -> Result<()> {
    if limit.is_finite() && limit >= 0.0 {
        Ok(())
    } else {
        Err(ExpenseError::Validation(format!(
            "budget limit must be zero or more, got {limit}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn draft(amount: f64, category: Category) -> ExpenseDraft {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        ExpenseDraft::new(amount, category, "", date).unwrap()
    }

    #[test]
    fn ids_follow_current_length() {
        let mut ledger = ExpenseLedger::new();
        assert_eq!(ledger.add_expense(draft(10.0, Category::Food)).id, 1);
        assert_eq!(ledger.add_expense(draft(20.0, Category::Food)).id, 2);
        assert_eq!(ledger.add_expense(draft(30.0, Category::Bills)).id, 3);

        ledger.remove_expense(1).unwrap();
        // Two expenses remain (ids 2 and 3); the next add reuses id 3.
        assert_eq!(ledger.add_expense(draft(40.0, Category::Other)).id, 3);
        let ids: Vec<u32> = ledger.expenses.iter().map(|expense| expense.id).collect();
        assert_eq!(ids, vec![2, 3, 3]);
    }

    #[test]
    fn remove_takes_first_match_only() {
        let mut ledger = ExpenseLedger::new();
        ledger.add_expense(draft(10.0, Category::Food));
        ledger.add_expense(draft(20.0, Category::Food));
        ledger.remove_expense(1).unwrap();
        ledger.add_expense(draft(30.0, Category::Food));

        let removed = ledger.remove_expense(2).unwrap();
        assert_eq!(removed.amount, 20.0);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.expenses[0].amount, 30.0);
    }

    #[test]
    fn remove_unknown_id_reports_not_found() {
        let mut ledger = ExpenseLedger::new();
        ledger.add_expense(draft(10.0, Category::Food));
        assert!(matches!(
            ledger.remove_expense(9),
            Err(ExpenseError::NotFound(9))
        ));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn category_total_spans_all_time() {
        let mut ledger = ExpenseLedger::new();
        ledger.add_expense(draft(10.0, Category::Food));
        ledger.add_expense(draft(15.5, Category::Food));
        ledger.add_expense(draft(99.0, Category::Health));
        assert_eq!(ledger.category_total(Category::Food), 25.5);
        assert_eq!(ledger.category_total(Category::Shopping), 0.0);
        assert_eq!(ledger.total(), 124.5);
    }

    #[test]
    fn set_budget_overwrites_and_rejects_negative_limits() {
        let mut ledger = ExpenseLedger::new();
        ledger.set_budget(Category::Food, 600.0).unwrap();
        ledger.set_budget(Category::Food, 0.0).unwrap();
        assert_eq!(ledger.budget_limit(Category::Food), Some(0.0));
        assert!(ledger.set_budget(Category::Food, -1.0).is_err());
        assert_eq!(ledger.budget_limit(Category::Food), Some(0.0));
        assert_eq!(ledger.budget_limit(Category::Bills), None);
    }

    #[test]
    fn validate_flags_hand_edited_documents() {
        let json = r#"{
            "expenses": [
                {"id": 1, "amount": -4.0, "category": "Food", "description": "x", "date": "01-06-2024"}
            ]
        }"#;
        let ledger: ExpenseLedger = serde_json::from_str(json).unwrap();
        assert!(ledger.budgets.is_empty());
        assert!(ledger.validate().is_err());

        let json = r#"{"budgets": {"Food": -1}}"#;
        let ledger: ExpenseLedger = serde_json::from_str(json).unwrap();
        assert!(ledger.validate().is_err());
    }
}
