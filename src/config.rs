use crate::error::{BumperError, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "bumper.toml";

/// One replace target: a file and the version template that locates the
/// version string inside it.
///
/// The template may embed `{{version}}`; the same template produces both
/// the search pattern (with the current version) and the replacement text
/// (with the new version).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Rule {
    pub file: String,
    pub version: String,
}

/// Complete configuration for a bump run
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// The version currently present in the target files
    pub current_version: String,

    /// Commit message used with `--commit`, "Bump version" when absent
    #[serde(default)]
    pub commit_message: Option<String>,

    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// Loads configuration from the given path, or `bumper.toml` in the
/// working directory.
///
/// There is no default configuration: `current_version` is project state
/// with no sensible fallback, so a missing file is an error.
///
/// # Arguments
/// * `config_path` - Optional path to a custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Parsed configuration with a non-empty current version
/// * `Err(BumperError::Config)` - Missing/unreadable file, TOML error, or
///   empty `current_version`
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = config_path.unwrap_or(CONFIG_FILE);

    let data = fs::read_to_string(path).map_err(|_| {
        BumperError::config(format!(
            "can't load the config file, make sure that {} exists",
            path
        ))
    })?;

    let config: Config =
        toml::from_str(&data).map_err(|e| BumperError::config(e.to_string()))?;

    if config.current_version.is_empty() {
        return Err(BumperError::config("current_version must not be empty"));
    }

    Ok(config)
}
