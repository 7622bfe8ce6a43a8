//! Practicum homework statuses API client

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use tracing::{debug, error};

use crate::Config;
use crate::error::ApiError;

/// Production homework statuses endpoint
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Authenticated client for the homework statuses endpoint
#[derive(Debug, Clone)]
pub struct PracticumClient {
    http: reqwest::Client,
    endpoint: Url,
    auth_header: String,
}

impl PracticumClient {
    /// Create a client from the worker configuration
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| ApiError::InvalidEndpoint(format!("{}: {}", config.endpoint, e)))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint,
            auth_header: format!("OAuth {}", config.practicum_token),
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Fetch homework statuses changed since `from_date` (Unix timestamp)
    ///
    /// One request per call, no retries.
    pub async fn fetch(&self, from_date: i64) -> Result<Value, ApiError> {
        debug!("Requesting {} with from_date={}", self.endpoint, from_date);

        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("from_date", &from_date.to_string());

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, self.auth_header.as_str())
            .send()
            .await
            .inspect_err(|e| error!("Request to {} failed: {}", self.endpoint, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(
                "Endpoint {} is unavailable. API response code: {}",
                self.endpoint,
                status.as_u16()
            );
            return Err(ApiError::StatusCode {
                endpoint: self.endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .inspect_err(|e| error!("Failed to read response from {}: {}", self.endpoint, e))?;

        serde_json::from_str(&body).map_err(|e| {
            error!("JSON invalid: {}", e);
            ApiError::InvalidJson(e)
        })
    }
}
