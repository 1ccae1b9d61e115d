//! HTTP client for the Bareos REST API.
//!
//! Two-step read path: a password-grant token exchange on `/token`, then
//! bearer-authenticated reads under `/control/`. Failures come back as a
//! narrow [`ApiError`] so the binary can map them onto the plugin's
//! UNKNOWN exit without guessing what went wrong.

pub mod models;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;

use crate::config::PluginConfig;
use models::{JobList, TokenResponse};

/// Jobs younger than this many hours are considered by the check.
const JOB_WINDOW_HOURS: u32 = 24;

/// Error returned by API client operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (connect, timeout, TLS, ...)
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The response body was not the expected shape
    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// The API answered with its `{"detail": "Not Found"}` sentinel
    #[error("value not found")]
    NotFound,
}

pub struct ApiClient {
    http: reqwest::Client,
    config: PluginConfig,
}

impl ApiClient {
    pub fn new(config: PluginConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { http, config })
    }

    /// Exchange the configured credentials for a bearer token.
    pub async fn fetch_token(&self) -> Result<String, ApiError> {
        let url = self.config.endpoint("token");
        let form = [
            ("grant_type", ""),
            ("username", self.config.username.as_str()),
            ("password", self.config.password.as_str()),
            ("scope", ""),
            ("client_id", ""),
            ("client_secret", ""),
        ];

        debug!(url = %url, user = %self.config.username, "requesting token");
        let response = self
            .http
            .post(&url)
            .header("accept", "application/json")
            .form(&form)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let token: TokenResponse = decode(&url, response).await?;
        Ok(token.access_token)
    }

    /// Jobs that ran within the check window.
    pub async fn recent_jobs(&self, token: &str) -> Result<JobList, ApiError> {
        let url = self.config.endpoint("control/jobs");
        debug!(url = %url, hours = JOB_WINDOW_HOURS, "fetching job list");
        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .json(&json!({ "hours": JOB_WINDOW_HOURS }))
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let list: JobList = decode(&url, response).await?;
        debug!(
            total = list.total_items,
            returned = list.jobs.len(),
            "job list fetched"
        );
        Ok(list)
    }

    /// Raw `/control/jobs/totals` payload, untouched.
    pub async fn job_totals(&self, token: &str) -> Result<Value, ApiError> {
        let url = self.config.endpoint("control/jobs/totals");
        debug!(url = %url, "fetching job totals");
        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        decode(&url, response).await
    }
}

/// Decode a response body, routing the API's not-found sentinel to its own
/// error variant before the target type gets a say.
async fn decode<T: DeserializeOwned>(
    url: &str,
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let text = response.text().await.map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })?;

    let body: Value = serde_json::from_str(&text).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })?;

    if is_not_found(&body) {
        return Err(ApiError::NotFound);
    }

    serde_json::from_value(body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

fn is_not_found(body: &Value) -> bool {
    body == &json!({ "detail": "Not Found" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_sentinel_is_recognized() {
        assert!(is_not_found(&json!({ "detail": "Not Found" })));
    }

    #[test]
    fn regular_payloads_are_not_not_found() {
        assert!(!is_not_found(&json!({ "detail": "ok" })));
        assert!(!is_not_found(&json!({ "totalItems": 0, "jobs": [] })));
        assert!(!is_not_found(&json!("Not Found")));
    }
}
