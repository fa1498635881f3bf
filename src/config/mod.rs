//! Application configuration loaded from a TOML file with environment overrides.

/// Database configuration and connection management
pub mod database;

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{
    env::{self, VarError},
    fs,
    path::Path,
    time::Duration,
};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "PANTRY_CONFIG";

/// Configuration file used when [`CONFIG_PATH_VAR`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level configuration. Every section is optional in the file.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Where the local cache lives
    pub database: DatabaseConfig,
    /// Rich-text editor bridge settings
    pub editor: EditorConfig,
}

/// `[database]` section.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection url
    pub url: String,
    /// Upper bound on pooled connections (concurrent queries beyond this queue up)
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: database::DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
        }
    }
}

/// `[editor]` section.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EditorConfig {
    /// How long a synchronous content read waits for the editor before giving up
    pub read_timeout_secs: u64,
}

impl EditorConfig {
    /// The read bound as a [`Duration`].
    #[must_use]
    pub const fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            read_timeout_secs: 20,
        }
    }
}

/// Parses configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse TOML configuration: {e}"),
    })
}

/// Reads and parses a configuration file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = fs::read_to_string(path_ref)?;
    parse_config(&contents).map_err(|e| Error::Config {
        message: format!("{path_ref:?}: {e}"),
    })
}

/// Loads the application configuration the way the binary does.
///
/// The file named by `PANTRY_CONFIG` (default `config.toml`) is read if it exists;
/// a missing file means defaults. `DATABASE_URL`, when set, replaces the database url.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = optional_env(env::var(CONFIG_PATH_VAR))?
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let mut config = if Path::new(&path).exists() {
        load_config(&path)?
    } else {
        tracing::info!("No configuration file at {}, using defaults.", path);
        AppConfig::default()
    };
    apply_env_overrides(&mut config, optional_env(env::var(database::DATABASE_URL_VAR))?);
    Ok(config)
}

/// An unset variable is `None`; a set but non-unicode one is an error.
fn optional_env(value: std::result::Result<String, VarError>) -> Result<Option<String>> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(Error::EnvVar(e)),
    }
}

fn apply_env_overrides(config: &mut AppConfig, database_url: Option<String>) {
    if let Some(url) = database_url.filter(|url| !url.trim().is_empty()) {
        config.database.url = url;
    }
}
