use std::{
    fmt::{Display, Formatter},
    fs,
    path::Path,
};
use toml::Value;

pub const CONFIG_FILE_NAME: &str = "shrinkray.toml";
pub const DEFAULT_PREFIX: &str = "scaled_";

/// Controls how output filenames are derived from input filenames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    ParseToml(toml::de::Error),
    InvalidField(&'static str, String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::ParseToml(err) => write!(f, "{err}"),
            Self::InvalidField(field, reason) => write!(f, "invalid field `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::ParseToml(value)
    }
}

/// Reads `shrinkray.toml` from `dir`. A missing file is not an error, the
/// defaults apply.
pub fn load_config(dir: &Path) -> Result<OutputConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        log::debug!("no {CONFIG_FILE_NAME} found, using the default output prefix");
        return Ok(OutputConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<OutputConfig, ConfigError> {
    let value: Value = contents.parse::<Value>()?;
    let Some(output) = value.get("output") else {
        return Ok(OutputConfig::default());
    };
    let output = output.as_table().ok_or(ConfigError::InvalidField(
        "output",
        "must be a table".to_string(),
    ))?;

    let prefix = match output.get("prefix") {
        None => DEFAULT_PREFIX.to_string(),
        Some(Value::String(prefix)) => prefix.clone(),
        Some(_) => {
            return Err(ConfigError::InvalidField(
                "output.prefix",
                "must be a string".to_string(),
            ));
        }
    };
    validate_prefix(&prefix)?;

    Ok(OutputConfig { prefix })
}

/// A prefix must be a plain filename fragment: non-empty, no path separators.
fn validate_prefix(prefix: &str) -> Result<(), ConfigError> {
    if prefix.is_empty() {
        return Err(ConfigError::InvalidField(
            "output.prefix",
            "must not be empty".to_string(),
        ));
    }
    if prefix.contains(['/', '\\']) {
        return Err(ConfigError::InvalidField(
            "output.prefix",
            "must not contain path separators".to_string(),
        ));
    }
    Ok(())
}
