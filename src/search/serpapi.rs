//! SerpAPI (Google results) backend.

use super::SearchBackend;
use crate::error::{HentError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

const API_URL: &str = "https://serpapi.com/search.json";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// SerpAPI-backed web search.
pub struct SerpApiBackend {
    client: reqwest::Client,
    api_key: String,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    title: String,
    link: String,
    #[serde(default)]
    snippet: String,
}

impl SerpApiBackend {
    /// Create a new SerpAPI backend.
    pub fn new(api_key: String, max_results: usize) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            max_results,
        }
    }

    fn format_results(results: &[OrganicResult]) -> String {
        if results.is_empty() {
            return "No results found.".to_string();
        }

        results
            .iter()
            .enumerate()
            .map(|(i, r)| format!("{}. {}\n   {}\n   {}", i + 1, r.title, r.link, r.snippet))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[async_trait]
impl SearchBackend for SerpApiBackend {
    fn name(&self) -> &str {
        "serpapi"
    }

    #[instrument(skip(self, text))]
    async fn query(&self, text: &str) -> Result<String> {
        debug!(max_results = self.max_results, "Querying SerpAPI");

        let num = self.max_results.to_string();
        let response = self
            .client
            .get(API_URL)
            .query(&[
                ("engine", "google"),
                ("q", text),
                ("num", num.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let parsed: SerpApiResponse = response
            .json()
            .await
            .map_err(|e| HentError::Backend(format!("Malformed SerpAPI response: {}", e)))?;

        // SerpAPI may return more than requested; trim to the configured cap.
        let trimmed = &parsed.organic_results
            [..parsed.organic_results.len().min(self.max_results)];

        debug!(results = trimmed.len(), "SerpAPI query complete");
        Ok(Self::format_results(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_results() {
        assert_eq!(SerpApiBackend::format_results(&[]), "No results found.");
    }

    #[test]
    fn test_format_includes_title_link_snippet() {
        let results = vec![OrganicResult {
            title: "The Rust Book".to_string(),
            link: "https://doc.rust-lang.org/book/".to_string(),
            snippet: "An introductory book about Rust.".to_string(),
        }];

        let text = SerpApiBackend::format_results(&results);
        assert!(text.contains("1. The Rust Book"));
        assert!(text.contains("https://doc.rust-lang.org/book/"));
        assert!(text.contains("An introductory book about Rust."));
    }
}
