pub mod json_backend;

use std::path::{Path, PathBuf};

use crate::{domain::ExpenseLedger, errors::Result};

/// Abstraction over persistence backends that store the whole ledger as one document.
pub trait StorageBackend {
    /// Reads the stored ledger. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<ExpenseLedger>>;

    /// Replaces the stored document with `ledger`.
    fn save(&self, ledger: &ExpenseLedger) -> Result<()>;

    /// Copies an unreadable document aside so a fresh save cannot destroy it.
    /// Returns the location of the copy, if one was made.
    fn preserve_unreadable(&self) -> Result<Option<PathBuf>>;

    /// Human-readable location of the backing document.
    fn location(&self) -> &Path;
}

pub use json_backend::{load_ledger_from_path, save_ledger_to_path, JsonStorage};
