use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::content;

/// Directory name under the platform config dir
pub const APP_DIR: &str = "foliotui";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// RSS-to-JSON relay endpoint
    pub relay_url: String,
    /// RSS feed URLs aggregated on the Blogs page, in display order
    pub feed_sources: Vec<String>,
    /// Command used to open links (e.g. `xdg-open`, `open`)
    pub open_command: Option<String>,
    /// Page shown at startup
    pub start_page: String,
    pub light_mode: bool,
    pub request_timeout_secs: u64,
    pub resume_path: String,
    pub contact_link: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            relay_url: content::DEFAULT_RELAY_URL.to_string(),
            feed_sources: vec![content::DEFAULT_FEED_SOURCE.to_string()],
            open_command: None,
            start_page: "about".to_string(),
            light_mode: false,
            request_timeout_secs: 10,
            resume_path: content::DEFAULT_RESUME_PATH.to_string(),
            contact_link: content::DEFAULT_CONTACT_LINK.to_string(),
        }
    }
}

impl Config {
    /// Parse YAML config; missing keys take their defaults
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("Failed to parse config YAML")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
    }
}

/// Determine the config file path with fallback logic
///
/// `Ok(None)` means no file exists anywhere and built-in defaults apply.
pub fn find_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/foliotui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(APP_DIR).join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

/// Resolve and load the config, falling back to defaults
pub fn load_config(cli_path: Option<&str>) -> Result<(Config, Option<PathBuf>)> {
    match find_config_path(cli_path)? {
        Some(path) => {
            let config = Config::load(&path)?;
            Ok((config, Some(path)))
        }
        None => Ok((Config::default(), None)),
    }
}
