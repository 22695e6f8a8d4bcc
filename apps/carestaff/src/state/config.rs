//! # Application Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CARESTAFF_ORG_NAME="St. Luke's"                                    │
//! │     CARESTAFF_ROLE=admin | client | none                               │
//! │     CARESTAFF_SEED=true | false                                        │
//! │     CARESTAFF_LOG="info,carestaff=debug"                               │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $CARESTAFF_CONFIG, or                                              │
//! │     ~/.config/carestaff/carestaff.toml (Linux)                         │
//! │     ~/Library/Application Support/org.carestaff.carestaff/ (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! organization_name = "St. Luke's General Hospital"
//! default_role = "admin"
//! seed_mock_data = true
//! log_filter = "info,carestaff=debug"
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use carestaff_core::Role;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

pub const CONFIG_PATH_ENV: &str = "CARESTAFF_CONFIG";
const CONFIG_FILE_NAME: &str = "carestaff.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Hospital name shown in the header.
    pub organization_name: String,

    /// Role the session starts signed in as. None starts signed out.
    pub default_role: Option<Role>,

    /// Populate the stores from the built-in mock data.
    pub seed_mock_data: bool,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            organization_name: "St. Luke's General Hospital".to_string(),
            default_role: None,
            seed_mock_data: true,
            log_filter: "info,carestaff=debug".to_string(),
        }
    }
}

/// Where the configuration file came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file.
    File(PathBuf),

    /// This path was checked but does not exist.
    Missing(PathBuf),

    /// No config directory could be determined.
    Defaults,
}

/// An environment override that was present but could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredOverride {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

impl IgnoredOverride {
    fn new(key: &'static str, value: String, reason: impl ToString) -> Self {
        IgnoredOverride {
            key,
            value,
            reason: reason.to_string(),
        }
    }
}

/// Result of [`AppConfig::load`], kept until logging is up.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigLoad {
    pub config: AppConfig,
    pub source: ConfigSource,
    pub ignored: Vec<IgnoredOverride>,
}

impl ConfigLoad {
    /// Logs where the config came from and every ignored override.
    pub fn report(&self) {
        match &self.source {
            ConfigSource::File(path) => info!(?path, "Loaded config from file"),
            ConfigSource::Missing(path) => debug!(?path, "Config file not found, using defaults"),
            ConfigSource::Defaults => debug!("No config directory, using defaults"),
        }

        for skipped in &self.ignored {
            warn!(
                key = skipped.key,
                value = %skipped.value,
                "Ignoring environment override: {}",
                skipped.reason
            );
        }
    }
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, `$CARESTAFF_CONFIG`, or platform default)
    /// 3. Environment variables
    ///
    /// Nothing is logged here: logging is configured from the result. Call
    /// [`ConfigLoad::report`] once a subscriber is installed.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<ConfigLoad> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> ConfigResult<ConfigLoad>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = config_path
            .or_else(|| lookup(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        let (mut config, source) = match path {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(&path)?;
                (Self::from_toml_str(&contents)?, ConfigSource::File(path))
            }
            Some(path) => (Self::default(), ConfigSource::Missing(path)),
            None => (Self::default(), ConfigSource::Defaults),
        };

        let ignored = config.apply_overrides(lookup);
        config.validate()?;

        Ok(ConfigLoad {
            config,
            source,
            ignored,
        })
    }

    /// Parses a TOML document. Missing keys take their default values.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.organization_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "organization_name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "log_filter".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Applies overrides from `lookup` (the process environment in `load`).
    ///
    /// Unparseable values leave the setting untouched and are returned.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Vec<IgnoredOverride>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut ignored = Vec::new();

        if let Some(name) = lookup("CARESTAFF_ORG_NAME") {
            self.organization_name = name;
        }

        if let Some(role) = lookup("CARESTAFF_ROLE") {
            if role.trim().eq_ignore_ascii_case("none") {
                self.default_role = None;
            } else {
                match role.parse::<Role>() {
                    Ok(parsed) => self.default_role = Some(parsed),
                    Err(e) => ignored.push(IgnoredOverride::new("CARESTAFF_ROLE", role, e)),
                }
            }
        }

        if let Some(seed) = lookup("CARESTAFF_SEED") {
            match seed.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => self.seed_mock_data = true,
                "0" | "false" | "no" => self.seed_mock_data = false,
                _ => ignored.push(IgnoredOverride::new(
                    "CARESTAFF_SEED",
                    seed,
                    "expected true or false",
                )),
            }
        }

        if let Some(filter) = lookup("CARESTAFF_LOG") {
            self.log_filter = filter;
        }

        ignored
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "carestaff", "carestaff")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
