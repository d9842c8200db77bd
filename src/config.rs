//! Configuration for the hotelcore library.
//!
//! Configuration is small: where the persisted JSON document lives and
//! whether missing state is seeded with the default rooms. Values are
//! merged from multiple sources with the following precedence (highest
//! to lowest):
//!
//! 1. Programmatic overrides (via [`ConfigBuilder::with_config`])
//! 2. Environment variables (`HOTELCORE_*`)
//! 3. User config file (`~/.hotelcore/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use hotelcore::config::{Config, ConfigBuilder};
//! use std::path::PathBuf;
//!
//! let custom = Config {
//!     data_file: Some(PathBuf::from("/tmp/hotel.json")),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.data_file, Some(PathBuf::from("/tmp/hotel.json")));
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name of the user configuration file inside the data directory.
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Name of the persisted JSON document inside the data directory.
const DATA_FILE_NAME: &str = "data.json";

/// Complete configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path of the persisted JSON document.
    pub data_file: Option<PathBuf>,

    /// Whether missing or corrupt state is seeded with the default rooms.
    pub seed_defaults: Option<bool>,
}

impl Config {
    /// Merges another configuration over this one.
    ///
    /// Fields set in `other` win.
    fn merge(&mut self, other: Self) {
        if other.data_file.is_some() {
            self.data_file = other.data_file;
        }
        if other.seed_defaults.is_some() {
            self.seed_defaults = other.seed_defaults;
        }
    }

    /// Returns whether seeding is enabled (the default).
    #[must_use]
    pub fn seed_defaults_or_default(&self) -> bool {
        self.seed_defaults.unwrap_or(true)
    }
}

/// Returns the default data directory (`~/.hotelcore`).
///
/// Returns `None` when the home directory cannot be determined.
#[must_use]
pub fn default_data_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".hotelcore"))
}

/// Resolves the path of the persisted JSON document.
///
/// Uses the configured `data_file` when set, otherwise
/// `~/.hotelcore/data.json`.
///
/// # Errors
///
/// Returns an error if no path is configured and the home directory
/// cannot be determined.
pub fn resolve_data_file(config: &Config) -> Result<PathBuf> {
    if let Some(path) = &config.data_file {
        return Ok(path.clone());
    }
    default_data_dir()
        .map(|dir| dir.join(DATA_FILE_NAME))
        .ok_or_else(|| Error::Validation {
            field: "data_file".into(),
            message: "no data file configured and home directory unknown".into(),
        })
}

/// Builder merging configuration from files, environment, and code.
///
/// # Examples
///
/// ```
/// use hotelcore::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .build()
///     .unwrap();
/// assert!(config.data_file.is_none());
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a new builder with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the directory searched for the user config file.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Skips loading the user configuration file.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips reading `HOTELCORE_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Builds the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the user config file exists but cannot be read
    /// or parsed, or if an environment variable holds an invalid value.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(file_config) = self.load_user_config()? {
                config.merge(file_config);
            }
        }

        if !self.skip_env {
            config.merge(Self::from_env()?);
        }

        if let Some(overrides) = self.overrides {
            config.merge(overrides);
        }

        Ok(config)
    }

    fn config_file_path(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(default_data_dir)
            .map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    fn load_user_config(&self) -> Result<Option<Config>> {
        let Some(path) = self.config_file_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        let config = serde_yaml::from_str(&contents)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(Some(config))
    }

    fn from_env() -> Result<Config> {
        let mut config = Config::default();

        if let Ok(value) = env::var("HOTELCORE_DATA_FILE") {
            config.data_file = Some(PathBuf::from(value));
        }

        if let Ok(value) = env::var("HOTELCORE_SEED_DEFAULTS") {
            config.seed_defaults = Some(parse_bool("HOTELCORE_SEED_DEFAULTS", &value)?);
        }

        Ok(config)
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(Error::Validation {
            field: name.into(),
            message: format!("expected a boolean, got {value:?}"),
        }),
    }
}

/// Loads the user configuration file from an explicit directory, if present.
///
/// Convenience wrapper for shells that manage their own precedence.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config_file(dir: &Path) -> Result<Option<Config>> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(&path)?;
    Ok(Some(serde_yaml::from_str(&contents)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults() {
        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config, Config::default());
        assert!(config.seed_defaults_or_default());
    }

    #[test]
    fn test_programmatic_overrides() {
        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                data_file: Some(PathBuf::from("/tmp/hotel.json")),
                seed_defaults: Some(false),
            })
            .build()
            .unwrap();

        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/hotel.json")));
        assert_eq!(config.seed_defaults, Some(false));
    }

    #[test]
    fn test_config_file_loading() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "data_file: /srv/hotel/data.json\nseed_defaults: false\n",
        )
        .unwrap();

        let config = ConfigBuilder::new()
            .with_data_dir(dir.path())
            .skip_env()
            .build()
            .unwrap();

        assert_eq!(
            config.data_file,
            Some(PathBuf::from("/srv/hotel/data.json"))
        );
        assert_eq!(config.seed_defaults, Some(false));
    }

    #[test]
    fn test_config_file_unknown_field_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "unknown_field: 1\n").unwrap();

        let result = ConfigBuilder::new()
            .with_data_dir(dir.path())
            .skip_env()
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_config_file_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigBuilder::new()
            .with_data_dir(dir.path())
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "data_file: /srv/hotel/data.json\n",
        )
        .unwrap();

        env::set_var("HOTELCORE_DATA_FILE", "/env/data.json");
        let config = ConfigBuilder::new()
            .with_data_dir(dir.path())
            .build()
            .unwrap();
        env::remove_var("HOTELCORE_DATA_FILE");

        assert_eq!(config.data_file, Some(PathBuf::from("/env/data.json")));
    }

    #[test]
    #[serial]
    fn test_env_bool_parsing() {
        for (value, expected) in [("true", true), ("1", true), ("no", false), ("0", false)] {
            env::set_var("HOTELCORE_SEED_DEFAULTS", value);
            let config = ConfigBuilder::new().skip_files().build().unwrap();
            assert_eq!(config.seed_defaults, Some(expected), "value {value:?}");
        }
        env::remove_var("HOTELCORE_SEED_DEFAULTS");
    }

    #[test]
    #[serial]
    fn test_env_bool_invalid() {
        env::set_var("HOTELCORE_SEED_DEFAULTS", "maybe");
        let result = ConfigBuilder::new().skip_files().build();
        env::remove_var("HOTELCORE_SEED_DEFAULTS");
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_data_file_configured() {
        let config = Config {
            data_file: Some(PathBuf::from("/tmp/hotel.json")),
            ..Default::default()
        };
        assert_eq!(
            resolve_data_file(&config).unwrap(),
            PathBuf::from("/tmp/hotel.json")
        );
    }

    #[test]
    fn test_load_config_file_explicit_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config_file(dir.path()).unwrap().is_none());

        fs::write(dir.path().join(CONFIG_FILE_NAME), "seed_defaults: true\n").unwrap();
        let config = load_config_file(dir.path()).unwrap().unwrap();
        assert_eq!(config.seed_defaults, Some(true));
    }
}
