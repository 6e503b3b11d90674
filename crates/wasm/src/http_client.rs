//! HTTP backend for the browser
//!
//! Uses gloo-net for browser fetch API

use async_trait::async_trait;
use game_panel_core::{Backend, HttpRequest, HttpResponse, Method, PanelConfig, PanelError, Result};
use gloo_net::http::Request;

pub struct FetchBackend {
    config: PanelConfig,
}

impl FetchBackend {
    pub fn new(config: PanelConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl Backend for FetchBackend {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let url = self.config.endpoint(&request.path);
        
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        
        let response = match &request.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body.clone())
                .map_err(|e| PanelError::Network(format!("Failed to build request: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| PanelError::Network(format!("Failed to send request: {}", e)))?;
        
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PanelError::Network(format!("Failed to read response: {}", e)))?;
        
        Ok(HttpResponse { status, body })
    }
}
