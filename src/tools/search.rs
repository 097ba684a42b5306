//! Web search tool.

use crate::config::SearchSettings;
use crate::error::Result;
use crate::search::{create_search_backend, SearchBackend};
use crate::tool::{InputSchema, PropertyType, Tool, ToolInput, ToolResult};
use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

/// Performs a web search through the configured backend.
///
/// The backend is injected at construction and held for the tool's lifetime.
/// Each invocation is a single attempt; retry and backoff are the backend's
/// concern, not this tool's.
pub struct SearchTool {
    backend: Box<dyn SearchBackend>,
}

impl SearchTool {
    /// Create a search tool around an existing backend.
    pub fn new(backend: Box<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// Create a search tool from settings, selecting the configured backend.
    pub fn from_settings(max_results: usize, settings: &SearchSettings) -> Result<Self> {
        Ok(Self::new(create_search_backend(max_results, settings)?))
    }
}

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &str {
        "web_search"
    }

    fn description(&self) -> &str {
        "Performs a web search using a search engine API and returns the search results."
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::new().required_field(
            "query",
            PropertyType::String,
            "The search query to perform.",
        )
    }

    async fn run(&self, input: &ToolInput) -> ToolResult {
        let query = match input.get_str("query") {
            Ok(query) => query,
            Err(e) => return ToolResult::failure(e.to_string(), "Invalid search input"),
        };

        debug!(query, backend = self.backend.name(), "Running web search");

        match self.backend.query(query).await {
            Ok(output) => ToolResult::success(
                output,
                format!(
                    "Search results with query: {} successfully retrieved using {}",
                    query,
                    self.backend.name()
                ),
            ),
            Err(e) => {
                warn!(backend = self.backend.name(), error = %e, "Web search failed");
                ToolResult::failure(
                    format!("Error searching the web with {}: {}", self.backend.name(), e),
                    format!("Failed to search the web with query: {}", query),
                )
                .with_diagnostics(json!({ "error": e.to_string() }))
            }
        }
    }
}
