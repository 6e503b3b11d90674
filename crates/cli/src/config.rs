//! Configuration management using config.toml

use game_panel_core::{PanelConfig, PanelError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Game backend origin
    #[serde(default = "default_base_url")]
    pub base_url: String,
    
    /// Request timeout in seconds; 0 disables it
    #[serde(default)]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: 0,
        }
    }
}

impl Config {
    /// Load config from `path`, falling back to defaults if it doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("{} not found, using defaults", path.display());
            return Ok(Config::default());
        }
        
        let content = fs::read_to_string(path)
            .map_err(|e| PanelError::Config(format!("Error reading {}: {}", path.display(), e)))?;
        Self::parse(&content)
            .map_err(|e| PanelError::Config(format!("Error parsing {}: {}", path.display(), e)))
    }
    
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
    
    /// Save config to file
    pub fn save(&self, path: &Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
    
    /// Apply `GAME_PANEL_URL` if set
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("GAME_PANEL_URL") {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
        self
    }
    
    pub fn panel(&self) -> PanelConfig {
        PanelConfig::with_base_url(self.base_url.clone())
    }
}
