//! Web search backend abstraction.
//!
//! Provides a trait-based interface over hosted search APIs, with concrete
//! backends selected by explicit configuration.

mod serpapi;
mod tavily;

pub use serpapi::SerpApiBackend;
pub use tavily::TavilyBackend;

use crate::config::{SearchProvider, SearchSettings};
use crate::error::{HentError, Result};
use async_trait::async_trait;

/// Trait for web search providers.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Provider name, used in result and failure messages.
    fn name(&self) -> &str;

    /// Run a search query and return formatted result text.
    async fn query(&self, text: &str) -> Result<String>;
}

/// Create the configured search backend.
///
/// Provider selection is explicit configuration, not runtime discovery. The
/// API key comes from the settings file or the provider's conventional
/// environment variable.
pub fn create_search_backend(
    max_results: usize,
    settings: &SearchSettings,
) -> Result<Box<dyn SearchBackend>> {
    let api_key = settings.resolved_api_key().ok_or_else(|| {
        HentError::Config(format!(
            "No API key configured for search provider '{}'",
            settings.provider
        ))
    })?;

    match settings.provider {
        SearchProvider::Tavily => Ok(Box::new(TavilyBackend::new(api_key, max_results))),
        SearchProvider::SerpApi => Ok(Box::new(SerpApiBackend::new(api_key, max_results))),
    }
}
