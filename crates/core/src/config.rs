//! Panel configuration shared by the browser and terminal front ends

use serde::{Deserialize, Serialize};

use crate::error::{PanelError, Result};

fn default_log_element() -> String {
    "log".to_string()
}

fn default_state_element() -> String {
    "state".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Backend origin, e.g. `http://127.0.0.1:5000`. Empty means same origin.
    #[serde(default)]
    pub base_url: String,
    
    /// Id of the element receiving the activity log
    #[serde(default = "default_log_element")]
    pub log_element: String,
    
    /// Id of the element receiving the rendered state
    #[serde(default = "default_state_element")]
    pub state_element: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            log_element: default_log_element(),
            state_element: default_state_element(),
        }
    }
}

impl PanelConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
    
    /// Join the base URL and an absolute action path
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
    
    pub fn validate(&self) -> Result<()> {
        let base = self.base_url.trim();
        if !base.is_empty() && !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(PanelError::Config(format!(
                "base_url must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        if self.log_element.is_empty() || self.state_element.is_empty() {
            return Err(PanelError::Config("element ids must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_doubled_slashes() {
        let config = PanelConfig::with_base_url("http://localhost:5000/");
        assert_eq!(config.endpoint("/reset"), "http://localhost:5000/reset");
        assert_eq!(PanelConfig::default().endpoint("/state"), "/state");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: PanelConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PanelConfig::default());
        assert_eq!(config.log_element, "log");
        assert_eq!(config.state_element, "state");
    }

    #[test]
    fn validate_rejects_non_http_base() {
        assert!(PanelConfig::with_base_url("ftp://example.org").validate().is_err());
        assert!(PanelConfig::with_base_url("https://example.org").validate().is_ok());
        assert!(PanelConfig::default().validate().is_ok());
    }
}
