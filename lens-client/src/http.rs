//! HTTP transport
//!
//! Network transport for the backend API. Responses arrive wrapped in the
//! unified `ApiResponse` envelope; the transport unwraps it and maps error
//! envelopes and HTTP status codes onto [`ClientError`].

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::response::ApiResponse;

/// Object-safe transport abstraction
///
/// Returns the decoded `data` payload for a path. Implemented by the
/// network client and by test doubles.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_raw(&self, path: &str) -> ClientResult<serde_json::Value>;
}

/// Network HTTP transport
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Base URL this transport talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<serde_json::Value> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            // Prefer the structured error envelope when the body carries one
            if let Ok(envelope) = serde_json::from_str::<ApiResponse<serde_json::Value>>(&text) {
                return Err(ClientError::Api {
                    code: envelope.code,
                    message: envelope.message,
                });
            }
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        let envelope: ApiResponse<serde_json::Value> = response.json().await?;
        if !envelope.is_success() {
            return Err(ClientError::Api {
                code: envelope.code,
                message: envelope.message,
            });
        }
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing response data".into()))
    }
}

#[async_trait]
impl Transport for NetworkHttpClient {
    async fn get_raw(&self, path: &str) -> ClientResult<serde_json::Value> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut req = self.client.get(&url);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }
}
