//! Portfolio data client — the single point of entry for data-source calls.
//!
//! The data source exposes two read endpoints returning UTF-8 JSON envelopes:
//! `GET /profile` and `GET /histories`. Each is a single blocking fetch with
//! no pagination, auth, or retries; any failure is fatal to the run.

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::models::{Envelope, History, Profile};

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Data source returned status {status} for {path}")]
    Status { status: u16, path: String },
}

/// HTTP client for the portfolio data source.
#[derive(Clone)]
pub struct PortfolioClient {
    client: Client,
    host: String,
}

impl PortfolioClient {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            host: host.into(),
        }
    }

    pub async fn fetch_profile(&self) -> Result<Profile, ClientError> {
        self.fetch("/profile").await
    }

    pub async fn fetch_histories(&self) -> Result<Vec<History>, ClientError> {
        self.fetch("/histories").await
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.host, path);
        debug!("Fetching {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.data)
    }
}
