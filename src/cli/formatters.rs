//! Fixed-width text layouts for expense tables and breakdowns.

use crate::core::services::CategoryShare;
use crate::domain::Expense;

pub const TABLE_WIDTH: usize = 80;
pub const SUMMARY_WIDTH: usize = 60;
pub const BAR_GLYPH: &str = "█";

pub fn money(symbol: &str, amount: f64) -> String {
    format!("{symbol}{amount:.2}")
}

pub fn rule(width: usize) -> String {
    "=".repeat(width)
}

pub fn thin_rule(width: usize) -> String {
    "-".repeat(width)
}

pub fn expense_header() -> String {
    format!(
        "{:<5} {:<12} {:<15} {:<10} {:<30}",
        "ID", "Date", "Category", "Amount", "Description"
    )
}

pub fn expense_row(symbol: &str, expense: &Expense) -> String {
    format!(
        "{:<5} {:<12} {:<15} {}{:<9.2} {}",
        expense.id,
        expense.date_text(),
        expense.category,
        symbol,
        expense.amount,
        expense.description
    )
}

pub fn total_row(symbol: &str, total: f64) -> String {
    format!("{:<42} {}", "TOTAL:", money(symbol, total))
}

/// `Food            ₹    250.00  ( 62.5%)`
pub fn share_row(symbol: &str, share: &CategoryShare) -> String {
    format!(
        "{:<15} {}{:>10.2}  ({:>5.1}%)",
        share.category, symbol, share.amount, share.percentage
    )
}

/// `Food            ₹  250.00 ███████████████████████████████ 62.5%`
pub fn bar_row(symbol: &str, share: &CategoryShare) -> String {
    format!(
        "{:<15} {}{:>8.2} {} {:.1}%",
        share.category,
        symbol,
        share.amount,
        BAR_GLYPH.repeat(share.bar_width()),
        share.percentage
    )
}
