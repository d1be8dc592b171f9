//! Configuration loading
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument (highest priority, clap also folds in `SIMPLEPEDIA_*` env vars)
//! 2. TOML config file
//! 3. Compiled default (fallback)
//!
//! A missing config file is not an error: startup continues on defaults with
//! a warning.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{Error, Result};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "SIMPLEPEDIA_CONFIG";

/// Compiled defaults used when neither CLI nor TOML supply a value
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5730,
            log_level: "info".to_string(),
        }
    }
}

/// Logging section of the TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

/// Server section of the TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// On-disk configuration; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// JSON fixture with the initial articles
    pub seed_path: Option<PathBuf>,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TomlConfig {
    /// Parse TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// Values supplied on the command line (already merged with env vars by clap)
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub seed_path: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

/// Fully resolved settings for a service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub seed_path: Option<PathBuf>,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Settings {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Merge CLI overrides, a TOML file and compiled defaults
pub fn resolve_settings(cli: &CliOverrides, file: &TomlConfig, defaults: &CompiledDefaults) -> Settings {
    Settings {
        seed_path: cli.seed_path.clone().or_else(|| file.seed_path.clone()),
        host: cli
            .host
            .clone()
            .or_else(|| file.server.host.clone())
            .unwrap_or_else(|| defaults.host.clone()),
        port: cli.port.or(file.server.port).unwrap_or(defaults.port),
        log_level: cli
            .log_level
            .clone()
            .or_else(|| file.logging.level.clone())
            .unwrap_or_else(|| defaults.log_level.clone()),
    }
}

/// Locate the config file
///
/// Explicit path first, then `SIMPLEPEDIA_CONFIG`, then
/// `<config_dir>/simplepedia/config.toml`.
pub fn locate_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|d| d.join("simplepedia").join("config.toml"))
        .filter(|path| path.exists())
}

/// Load the config file, falling back to an empty config
///
/// An explicitly named file that fails to parse is an error; a file that
/// does not exist only produces a warning.
pub fn load_toml_config(explicit: Option<&Path>) -> Result<TomlConfig> {
    let Some(path) = locate_config_file(explicit) else {
        info!("No config file found, using defaults");
        return Ok(TomlConfig::default());
    };

    match TomlConfig::load(&path) {
        Ok(config) => {
            info!("Loaded config from {}", path.display());
            Ok(config)
        }
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Config file {} not found, using defaults", path.display());
            Ok(TomlConfig::default())
        }
        Err(e) => Err(Error::Config(format!("{}: {}", path.display(), e))),
    }
}
