//! Seams between the dispatcher and its platform
//! 
//! `Backend` performs the HTTP call, `Surface` shows the results. The browser
//! and terminal front ends each provide one of both.

use async_trait::async_trait;

use crate::actions::{HttpRequest, HttpResponse};
use crate::error::Result;
use crate::models::GameState;

/// Executes a single HTTP request against the game backend.
///
/// Implementations report transport failures as `PanelError::Network` and
/// return every completed response, whatever its status.
#[async_trait(?Send)]
pub trait Backend {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// Presentation target holding the log and state regions
pub trait Surface {
    /// Replace the log region with the full log text
    fn show_log(&self, text: &str);
    
    /// Replace the state region with a projection of `state`
    fn show_state(&self, state: &GameState);
}
