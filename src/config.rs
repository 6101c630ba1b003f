//! Application configuration management.
//!
//! Configuration is stored at `~/.config/sabhatrack/config.json` and holds
//! the portal base URL, the constituency name shown in report headings, and
//! an optional preferred season. The bearer token is deliberately not
//! persisted here - it comes from `SABHATRACK_TOKEN` (env or .env file).

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "sabhatrack";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Default portal base URL, overridable via config or SABHATRACK_API_URL
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub constituency: Option<String>,
    pub preferred_season_id: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn cache_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    /// Resolved base URL: env override, then config, then the default
    pub fn resolved_api_url(&self) -> String {
        if let Ok(url) = std::env::var("SABHATRACK_API_URL") {
            return url;
        }
        self.api_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}
