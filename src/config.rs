//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_API_BASE;
use crate::contract::DEFAULT_METADATA_URI;
use crate::models::Account;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub contract: ContractConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Asset backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Active account
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub account: String,
}

impl SessionConfig {
    pub fn account(&self) -> Account {
        Account::new(self.account.trim())
    }
}

/// Minting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ContractConfig {
    /// Mint through the in-process no-op contract instead of failing
    #[serde(default = "default_contract_enabled")]
    pub enabled: bool,

    #[serde(default = "default_metadata_uri")]
    pub metadata_uri: String,
}

fn default_contract_enabled() -> bool {
    false
}

fn default_metadata_uri() -> String {
    DEFAULT_METADATA_URI.to_string()
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            enabled: default_contract_enabled(),
            metadata_uri: default_metadata_uri(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Nothing is logged here; the caller reports the outcome with
    /// [`LoadedConfig::log`] once a subscriber is installed.
    pub fn load_default() -> LoadedConfig {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("assetboard").join("config.toml")),
            Some(PathBuf::from("/etc/assetboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths, |key| std::env::var(key).ok())
    }

    /// Load the first readable file among `paths`, remembering the ones skipped
    fn load_first(paths: &[PathBuf], lookup: impl Fn(&str) -> Option<String>) -> LoadedConfig {
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|path| path.exists()) {
            match Self::load(path) {
                Ok(mut config) => {
                    config.apply_overrides(&lookup);
                    return LoadedConfig {
                        config,
                        source: Some(path.clone()),
                        skipped,
                    };
                }
                Err(e) => skipped.push(e),
            }
        }

        let mut config = Config::default();
        config.apply_overrides(&lookup);
        LoadedConfig {
            config,
            source: None,
            skipped,
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a variable lookup
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("ASSETBOARD_API_URL") {
            self.api.base_url = url;
        }
        if let Some(account) = lookup("ASSETBOARD_ACCOUNT") {
            self.session.account = account;
        }
        if let Some(uri) = lookup("ASSETBOARD_METADATA_URI") {
            self.contract.metadata_uri = uri;
        }
        if let Some(level) = lookup("ASSETBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("ASSETBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Result of searching the default config locations
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` means defaults
    pub source: Option<PathBuf>,
    /// Files that existed but could not be loaded
    pub skipped: Vec<ConfigError>,
}

impl LoadedConfig {
    pub fn log(&self) {
        for error in &self.skipped {
            tracing::warn!("Failed to load config: {}", error);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Assetboard Configuration
#
# Environment variables override these settings:
# - ASSETBOARD_API_URL
# - ASSETBOARD_ACCOUNT
# - ASSETBOARD_METADATA_URI
# - ASSETBOARD_LOG_LEVEL
# - ASSETBOARD_LOG_FORMAT

[api]
# Asset backend base URL
base_url = "http://localhost:3001"

# Request timeout in seconds
request_timeout_secs = 30

[session]
# Account whose assets are listed and submitted
account = ""

[contract]
# Mint through the built-in no-op contract. Nothing reaches a chain;
# with this off, mint commands fail.
enabled = false

# Metadata URI passed with every mint
metadata_uri = "ipfs://YOUR_IPFS_URI"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
