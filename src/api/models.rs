//! Wire types for the Bareos REST API.

use serde::Deserialize;

/// Response of the `/token` password-grant exchange.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Response of `GET /control/jobs`.
#[derive(Debug, Deserialize)]
pub struct JobList {
    #[serde(rename = "totalItems")]
    pub total_items: u64,
    pub jobs: Vec<JobRecord>,
}

/// One job execution as reported by the director.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRecord {
    pub jobid: u64,
    pub client: String,
    pub level: String,
    pub jobstatus: String,
    pub duration: String,
    pub jobfiles: u64,
    /// Unsigned on purpose: a negative byte count is a malformed payload
    /// and fails the decode.
    pub jobbytes: u64,
}
