//! Budget threshold evaluation.

use crate::domain::{Category, ExpenseLedger};

/// Share of a limit above which spending is reported as nearly exhausted.
pub const ALERT_RATIO: f64 = 0.8;

/// Outcome of comparing a category's all-time spending with its limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetAlert {
    Exceeded {
        category: Category,
        limit: f64,
        spent: f64,
        overspend: f64,
    },
    NearLimit {
        category: Category,
        limit: f64,
        spent: f64,
        remaining: f64,
    },
}

impl BudgetAlert {
    pub fn category(&self) -> Category {
        match self {
            BudgetAlert::Exceeded { category, .. } | BudgetAlert::NearLimit { category, .. } => {
                *category
            }
        }
    }
}

/// Stateless budgeting utilities that operate over [`ExpenseLedger`] snapshots.
pub struct BudgetService;

impl BudgetService {
    /// Evaluates the configured limit for `category`, if any.
    pub fn check(ledger: &ExpenseLedger, category: Category) -> Option<BudgetAlert> {
        let limit = ledger.budget_limit(category)?;
        let spent = ledger.category_total(category);
        let alert = Self::evaluate(category, limit, spent);
        tracing::debug!(%category, limit, spent, alerted = alert.is_some(), "budget evaluated");
        alert
    }

    /// `spent > limit` exceeds; otherwise `spent > 0.8 * limit` is near the limit.
    pub fn evaluate(category: Category, limit: f64, spent: f64) -> Option<BudgetAlert> {
        if spent > limit {
            Some(BudgetAlert::Exceeded {
                category,
                limit,
                spent,
                overspend: spent - limit,
            })
        } else if spent > limit * ALERT_RATIO {
            Some(BudgetAlert::NearLimit {
                category,
                limit,
                spent,
                remaining: limit - spent,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::ExpenseDraft;

    fn add(ledger: &mut ExpenseLedger, amount: f64, category: Category) {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        ledger.add_expense(ExpenseDraft::new(amount, category, "", date).unwrap());
    }

    #[test]
    fn no_limit_means_no_alert() {
        let mut ledger = ExpenseLedger::new();
        add(&mut ledger, 10_000.0, Category::Food);
        assert_eq!(BudgetService::check(&ledger, Category::Food), None);
    }

    #[test]
    fn thresholds_at_boundaries() {
        let food = Category::Food;
        assert_eq!(BudgetService::evaluate(food, 100.0, 80.0), None);
        assert!(matches!(
            BudgetService::evaluate(food, 100.0, 80.5),
            Some(BudgetAlert::NearLimit { remaining, .. }) if (remaining - 19.5).abs() < 1e-9
        ));
        assert!(matches!(
            BudgetService::evaluate(food, 100.0, 100.0),
            Some(BudgetAlert::NearLimit { remaining, .. }) if remaining == 0.0
        ));
        assert!(matches!(
            BudgetService::evaluate(food, 100.0, 130.0),
            Some(BudgetAlert::Exceeded { overspend, .. }) if overspend == 30.0
        ));
    }

    #[test]
    fn zero_limit_is_exceeded_by_any_spending() {
        assert!(matches!(
            BudgetService::evaluate(Category::Other, 0.0, 0.01),
            Some(BudgetAlert::Exceeded { .. })
        ));
    }

    #[test]
    fn spending_equal_to_limit_takes_near_limit_branch() {
        let mut ledger = ExpenseLedger::new();
        add(&mut ledger, 500.0, Category::Food);
        ledger.set_budget(Category::Food, 600.0).unwrap();
        assert!(matches!(
            BudgetService::check(&ledger, Category::Food),
            Some(BudgetAlert::NearLimit { remaining, .. }) if (remaining - 100.0).abs() < 1e-9
        ));

        add(&mut ledger, 100.0, Category::Food);
        let alert = BudgetService::check(&ledger, Category::Food).expect("alert expected");
        assert_eq!(
            alert,
            BudgetAlert::NearLimit {
                category: Category::Food,
                limit: 600.0,
                spent: 600.0,
                remaining: 0.0,
            }
        );
        assert_eq!(alert.category(), Category::Food);
    }
}
