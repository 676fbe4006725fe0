//! HTTP client for the eventdesk API.

pub mod events;
pub mod health;

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Message-only response body returned by delete and register.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// HTTP client for the eventdesk API.
#[derive(Debug, Clone)]
pub struct EventdeskClient {
    client: reqwest::Client,
    base_url: String,
}

impl EventdeskClient {
    /// Create a new client with the given base URL.
    ///
    /// Trailing slashes are stripped so joined paths never double up.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment (EVENTDESK_URL or default).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("EVENTDESK_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else if status.as_u16() == 404 {
            Err(ClientError::NotFound {
                resource: "Event".to_string(),
            })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
