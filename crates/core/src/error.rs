//! Error types for the game panel

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PanelError {
    #[error("Network error: {0}")]
    Network(String),
    
    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },
    
    #[error("Invalid response: {0}")]
    Decode(String),
    
    #[error("Configuration error: {0}")]
    Config(String),
    
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<serde_json::Error> for PanelError {
    fn from(err: serde_json::Error) -> Self {
        PanelError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PanelError>;
