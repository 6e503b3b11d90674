//! Native HTTP backend using reqwest

use async_trait::async_trait;
use game_panel_core::{Backend, HttpRequest, HttpResponse, Method, PanelConfig, PanelError, Result};
use std::time::Duration;

pub struct ReqwestBackend {
    client: reqwest::Client,
    config: PanelConfig,
}

impl ReqwestBackend {
    pub fn new(config: PanelConfig, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| PanelError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }
}

#[async_trait(?Send)]
impl Backend for ReqwestBackend {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let url = self.config.endpoint(&request.path);
        tracing::debug!("{} {}", request.method.as_str(), url);
        
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        if let Some(body) = &request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body.clone());
        }
        
        let response = builder
            .send()
            .await
            .map_err(|e| PanelError::Network(format!("Failed to send request: {}", e)))?;
        
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| PanelError::Network(format!("Failed to read response: {}", e)))?;
        
        Ok(HttpResponse { status, body })
    }
}
