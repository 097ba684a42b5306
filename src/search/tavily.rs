//! Tavily search API backend.

use super::SearchBackend;
use crate::error::{HentError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, instrument};

const API_URL: &str = "https://api.tavily.com/search";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Tavily-backed web search.
pub struct TavilyBackend {
    client: reqwest::Client,
    api_key: String,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Debug, Deserialize)]
struct TavilyResult {
    title: String,
    url: String,
    #[serde(default)]
    content: String,
}

impl TavilyBackend {
    /// Create a new Tavily backend.
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

    fn format_response(response: &TavilyResponse) -> String {
        if response.results.is_empty() {
            return "No results found.".to_string();
        }

        let formatted = response
            .results
            .iter()
            .enumerate()
            .map(|(i, r)| format!("{}. {}\n   {}\n   {}", i + 1, r.title, r.url, r.content))
            .collect::<Vec<_>>()
            .join("\n\n");

        match &response.answer {
            Some(answer) if !answer.is_empty() => {
                format!("Answer: {}\n\n{}", answer, formatted)
            }
            _ => formatted,
        }
    }
}

#[async_trait]
impl SearchBackend for TavilyBackend {
    fn name(&self) -> &str {
        "tavily"
    }

    #[instrument(skip(self, text))]
    async fn query(&self, text: &str) -> Result<String> {
        debug!(max_results = self.max_results, "Querying Tavily");

        let response = self
            .client
            .post(API_URL)
            .json(&json!({
                "api_key": self.api_key,
                "query": text,
                "max_results": self.max_results,
                "include_answer": true,
            }))
            .send()
            .await?
            .error_for_status()?;

        let parsed: TavilyResponse = response
            .json()
            .await
            .map_err(|e| HentError::Backend(format!("Malformed Tavily response: {}", e)))?;

        debug!(results = parsed.results.len(), "Tavily query complete");
        Ok(Self::format_response(&parsed))
    }
}
