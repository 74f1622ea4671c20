use thiserror::Error;

/// Error type that captures expense store failures.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Invalid date `{0}` (expected DD-MM-YYYY)")]
    InvalidDate(String),
    #[error("Expense not found: {0}")]
    NotFound(u32),
}

pub type Result<T> = std::result::Result<T, ExpenseError>;
