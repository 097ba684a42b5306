//! JSON-over-HTTP fetching with sensible defaults.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Default timeout for JSON fetches (30 seconds).
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Trait for fetching a JSON document by URL.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// GET `url` and parse the response body as JSON.
    ///
    /// Errors on a non-success HTTP status.
    async fn get_json(&self, url: &str) -> Result<Value>;
}

/// `reqwest`-backed fetcher with a configured timeout.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a fetcher with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        Ok(response.json::<Value>().await?)
    }
}
