//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_ENV, DEFAULT_DEBOUNCE_MS, DEFAULT_NAVIGATION_DELAY_MS};

/// Upper bound for any form timing, in milliseconds.
const MAX_TIMING_MS: u64 = 60_000;

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Tenant/session token used when saving parties
    pub tenant_id: Option<String>,
}

/// Party store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding one JSON file per saved party
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        let data_dir = Self::default_data_dir().unwrap_or_else(|_| PathBuf::from("parties"));

        Self { data_dir }
    }
}

impl StoreConfig {
    /// Gets the default data directory path (`<config dir>/parties`).
    fn default_data_dir() -> Result<PathBuf> {
        Ok(Config::config_dir()?.join("parties"))
    }
}

/// Form timing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Quiet period before regenerating the id after a name edit
    pub debounce_ms: u64,
    /// Delay between a successful save and navigation
    pub navigation_delay_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            navigation_delay_ms: DEFAULT_NAVIGATION_DELAY_MS,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Session settings
    pub session: SessionConfig,
    /// Party store settings
    pub store: StoreConfig,
    /// Form timings
    pub form: FormConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// `PARTY_INTAKE_CONFIG_DIR` takes precedence. Otherwise:
    /// - Linux: `~/.config/PartyIntake/`
    /// - macOS: `~/Library/Application Support/PartyIntake/`
    /// - Windows: `%APPDATA%\PartyIntake\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("PartyIntake");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` via a temp file and rename.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context(format!(
                "Failed to create config directory: {}",
                dir.display()
            ))?;
        }

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("form.debounce_ms", self.form.debounce_ms),
            ("form.navigation_delay_ms", self.form.navigation_delay_ms),
        ] {
            if value == 0 {
                anyhow::bail!("{name} must be greater than zero");
            }
            if value > MAX_TIMING_MS {
                anyhow::bail!("{name} must be at most {MAX_TIMING_MS} ms (got {value})");
            }
        }

        if self.store.data_dir.as_os_str().is_empty() {
            anyhow::bail!("store.data_dir must not be empty");
        }

        Ok(())
    }

    /// Session token, ignoring blank values.
    #[must_use]
    pub fn tenant_id(&self) -> Option<&str> {
        self.session
            .tenant_id
            .as_deref()
            .filter(|token| !token.trim().is_empty())
    }
}
