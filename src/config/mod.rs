use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_DATA_FILE: &str = "expenses.json";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Runtime settings for a tracker session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub data_file: PathBuf,
    pub currency_symbol: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.into(),
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launch {
    Run(TrackerConfig),
    Help,
    Version,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("option `{0}` requires a value")]
    MissingValue(String),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

impl TrackerConfig {
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    /// Parses command-line arguments (program name excluded).
    ///
    /// The only setting is the data file, given as `--file <path>`, `-f <path>`
    /// or a single positional path.
    pub fn from_args<I, S>(args: I) -> Result<Launch, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = TrackerConfig::default();
        let mut data_file: Option<String> = None;
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Launch::Help),
                "-V" | "--version" => return Ok(Launch::Version),
                "-f" | "--file" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    set_once(&mut data_file, value)?;
                }
                other => {
                    if let Some(value) = other.strip_prefix("--file=") {
                        set_once(&mut data_file, value.to_string())?;
                    } else if other.starts_with('-') && other.len() > 1 {
                        return Err(ConfigError::UnexpectedArgument(other.to_string()));
                    } else {
                        set_once(&mut data_file, other.to_string())?;
                    }
                }
            }
        }

        if let Some(path) = data_file {
            config = config.with_data_file(path);
        }
        Ok(Launch::Run(config))
    }
}

fn set_once(slot: &mut Option<String>, value: String) -> Result<(), ConfigError> {
    if slot.is_some() {
        return Err(ConfigError::UnexpectedArgument(value));
    }
    if value.trim().is_empty() {
        return Err(ConfigError::MissingValue("--file".into()));
    }
    *slot = Some(value);
    Ok(())
}
