//! Expense records and the validated draft they are built from.

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Category;
use crate::errors::{ExpenseError, Result};

/// Textual date layout used for entry, display and persistence.
pub const DATE_FORMAT: &str = "%d-%m-%Y";
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// A single recorded transaction. Expenses are never edited, only removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u32,
    pub amount: f64,
    pub category: Category,
    pub description: String,
    #[serde(with = "date_text")]
    pub date: NaiveDate,
}

impl Expense {
    pub fn from_draft(id: u32, draft: ExpenseDraft) -> Self {
        Self {
            id,
            amount: draft.amount,
            category: draft.category,
            description: draft.description,
            date: draft.date,
        }
    }

    /// The date rendered as `DD-MM-YYYY`.
    pub fn date_text(&self) -> String {
        format_date(self.date)
    }
}

/// User-supplied fields of a new expense, validated but not yet numbered.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    amount: f64,
    category: Category,
    description: String,
    date: NaiveDate,
}

impl ExpenseDraft {
    /// Validates the amount and substitutes the default for a blank description.
    pub fn new(
        amount: f64,
        category: Category,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self> {
        validate_amount(amount)?;
        let description = description.into().trim().to_string();
        let description = if description.is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            description
        };
        Ok(Self {
            amount,
            category,
            description,
            date,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Rejects zero, negative and non-finite expense amounts.
pub fn validate_amount(amount: f64) -> Result<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(ExpenseError::Validation(format!(
            "amount must be positive, got {amount}"
        )))
    }
}

/// Parses a `DD-MM-YYYY` calendar date. Impossible dates such as `31-02-2024` fail.
///
/// Day and month take one or two digits; the year takes exactly four, so
/// `01-06-24` is rejected rather than read as year 24.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    let invalid = || ExpenseError::InvalidDate(trimmed.to_string());

    let parts: Vec<&str> = trimmed.split('-').collect();
    let [day, month, year] = parts[..] else {
        return Err(invalid());
    };
    if !(is_digits(day, 1..=2) && is_digits(month, 1..=2) && is_digits(year, 4..=4)) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid())
}

fn is_digits(part: &str, widths: RangeInclusive<usize>) -> bool {
    widths.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

mod date_text {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn draft_rejects_non_positive_amounts() {
        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = ExpenseDraft::new(amount, Category::Food, "Lunch", june(1));
            assert!(
                matches!(result, Err(ExpenseError::Validation(_))),
                "amount {amount} should be rejected"
            );
        }
    }

    #[test]
    fn blank_description_falls_back_to_default() {
        let draft = ExpenseDraft::new(12.5, Category::Transport, "   ", june(3)).unwrap();
        assert_eq!(draft.description(), DEFAULT_DESCRIPTION);

        let draft = ExpenseDraft::new(12.5, Category::Transport, " Bus pass ", june(3)).unwrap();
        assert_eq!(draft.description(), "Bus pass");
    }

    #[test]
    fn parse_date_accepts_calendar_dates_only() {
        assert_eq!(parse_date("01-06-2024").unwrap(), june(1));
        assert_eq!(parse_date(" 15-06-2024 ").unwrap(), june(15));
        assert!(matches!(
            parse_date("31-02-2024"),
            Err(ExpenseError::InvalidDate(_))
        ));
        assert!(parse_date("2024-06-01").is_err());
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn parse_date_requires_a_four_digit_year() {
        for raw in ["01-06-24", "01-06-+2024", "01-06-02024", "+1-06-2024", "01--06-2024"] {
            assert!(
                matches!(parse_date(raw), Err(ExpenseError::InvalidDate(_))),
                "`{raw}` should be rejected"
            );
        }
        assert_eq!(format_date(parse_date("01-06-0024").unwrap()), "01-06-0024");
    }

    #[test]
    fn dates_are_normalized_to_zero_padded_text() {
        let date = parse_date("1-6-2024").unwrap();
        assert_eq!(format_date(date), "01-06-2024");
    }

    #[test]
    fn expense_serializes_date_as_text() {
        let draft = ExpenseDraft::new(500.0, Category::Food, "Lunch", june(1)).unwrap();
        let expense = Expense::from_draft(1, draft);
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["date"], "01-06-2024");
        assert_eq!(json["category"], "Food");
        assert_eq!(json["id"], 1);

        let restored: Expense = serde_json::from_value(json).unwrap();
        assert_eq!(restored, expense);
    }
}
