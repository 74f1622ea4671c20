use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{domain::ExpenseLedger, errors::Result};

use super::StorageBackend;

const TMP_SUFFIX: &str = "tmp";
const CORRUPT_SUFFIX: &str = "corrupt";

/// Stores the ledger as a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unreadable document is copied before starting fresh.
    pub fn corrupt_copy_path(&self) -> PathBuf {
        sibling_path(&self.path, CORRUPT_SUFFIX)
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Option<ExpenseLedger>> {
        if !self.path.exists() {
            return Ok(None);
        }
        load_ledger_from_path(&self.path).map(Some)
    }

    fn save(&self, ledger: &ExpenseLedger) -> Result<()> {
        save_ledger_to_path(ledger, &self.path)?;
        tracing::info!(
            path = %self.path.display(),
            expenses = ledger.len(),
            "saved expense ledger"
        );
        Ok(())
    }

    fn preserve_unreadable(&self) -> Result<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let copy = self.corrupt_copy_path();
        fs::copy(&self.path, &copy)?;
        Ok(Some(copy))
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

/// Loads and validates a ledger document from disk.
pub fn load_ledger_from_path(path: &Path) -> Result<ExpenseLedger> {
    let data = fs::read_to_string(path)?;
    let ledger: ExpenseLedger = serde_json::from_str(&data)?;
    ledger.validate()?;
    Ok(ledger)
}

/// Writes the ledger by staging to a temporary sibling and renaming it over the target.
pub fn save_ledger_to_path(ledger: &ExpenseLedger, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(ledger)?;
    write_atomic(path, &json)
}

fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut sibling = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, suffix),
        None => suffix.to_string(),
    };
    sibling.set_extension(ext);
    sibling
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = sibling_path(path, TMP_SUFFIX);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}
