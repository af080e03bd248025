use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::provider::wttr::DEFAULT_BASE_URL;

pub const DEFAULT_LANG: &str = "en";
pub const DEFAULT_CITY: &str = "";
pub const DEFAULT_UNIT: &str = "C";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Optional on-disk defaults. Command-line flags always win.
///
/// Example TOML:
/// ```toml
/// lang = "de"
/// city = "Berlin"
/// unit = "C"
/// timeout_secs = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub lang: Option<String>,
    pub city: Option<String>,
    pub unit: Option<String>,

    /// Weather service endpoint, e.g. a self-hosted wttr.in instance.
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn lang(&self) -> &str {
        self.lang.as_deref().unwrap_or(DEFAULT_LANG)
    }

    pub fn city(&self) -> &str {
        self.city.as_deref().unwrap_or(DEFAULT_CITY)
    }

    pub fn unit(&self) -> &str {
        self.unit.as_deref().unwrap_or(DEFAULT_UNIT)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Load config from the platform config dir, or return defaults if there is none.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_file_path() else {
            tracing::debug!("no platform config directory, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load config from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), ?cfg, "loaded config");
        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "wttr-bar", "wttr-bar").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
