#![allow(dead_code)]

use std::path::PathBuf;

use chrono::NaiveDate;
use expense_tracker::{
    cli::{ScriptedConsole, ShellContext},
    config::TrackerConfig,
    core::FixedClock,
};
use tempfile::TempDir;

/// Date every scripted session treats as today.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 20).unwrap()
}

/// Isolated data file inside a temporary directory. Keep the `TempDir` alive
/// for as long as the file is used.
pub fn temp_data_file() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("expenses.json");
    (dir, path)
}

/// Session over `path` fed with `inputs`, using a `$` currency symbol.
pub fn scripted_session<I, S>(path: &PathBuf, inputs: I) -> ShellContext<ScriptedConsole>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let config = TrackerConfig {
        data_file: path.clone(),
        currency_symbol: "$".into(),
    };
    ShellContext::with_json_storage(
        config,
        ScriptedConsole::new(inputs),
        Box::new(FixedClock(today())),
    )
}
