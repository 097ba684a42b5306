//! Configuration settings for Hent.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub search: SearchSettings,
    pub transcript: TranscriptSettings,
}


/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Web search provider type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Tavily search API (default).
    #[default]
    Tavily,
    /// SerpAPI (Google results).
    SerpApi,
}

impl SearchProvider {
    /// Conventional environment variable holding the provider's API key.
    pub fn env_var(&self) -> &'static str {
        match self {
            SearchProvider::Tavily => "TAVILY_API_KEY",
            SearchProvider::SerpApi => "SERPAPI_API_KEY",
        }
    }
}

impl std::str::FromStr for SearchProvider {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tavily" => Ok(SearchProvider::Tavily),
            "serpapi" | "serp_api" => Ok(SearchProvider::SerpApi),
            _ => Err(format!("Unknown search provider: {}", s)),
        }
    }
}

impl std::fmt::Display for SearchProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchProvider::Tavily => write!(f, "tavily"),
            SearchProvider::SerpApi => write!(f, "serpapi"),
        }
    }
}

/// Web search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Search provider (tavily, serpapi).
    pub provider: SearchProvider,
    /// Maximum number of results per query.
    pub max_results: usize,
    /// API key for the provider. Falls back to the provider's environment
    /// variable when unset.
    pub api_key: Option<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            provider: SearchProvider::Tavily,
            max_results: 5,
            api_key: None,
        }
    }
}

impl SearchSettings {
    /// Resolve the API key from settings or the environment.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(self.provider.env_var()).ok())
    }
}

/// Transcript retrieval settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSettings {
    /// Path or name of the yt-dlp binary.
    pub ytdlp_bin: String,
    /// Timeout for caption payload fetches, in seconds.
    pub http_timeout_seconds: u64,
}

impl Default for TranscriptSettings {
    fn default() -> Self {
        Self {
            ytdlp_bin: "yt-dlp".to_string(),
            http_timeout_seconds: 30,
        }
    }
}

impl TranscriptSettings {
    /// Expanded path or name of the yt-dlp binary (e.g., ~ resolved).
    pub fn ytdlp_binary(&self) -> String {
        shellexpand::tilde(&self.ytdlp_bin).to_string()
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::HentError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hent")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_provider_parse_and_display() {
        assert_eq!(
            SearchProvider::from_str("tavily").unwrap(),
            SearchProvider::Tavily
        );
        assert_eq!(
            SearchProvider::from_str("SerpApi").unwrap(),
            SearchProvider::SerpApi
        );
        assert!(SearchProvider::from_str("bing").is_err());

        assert_eq!(SearchProvider::Tavily.to_string(), "tavily");
        assert_eq!(SearchProvider::SerpApi.to_string(), "serpapi");
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.search.provider, SearchProvider::Tavily);
        assert_eq!(settings.search.max_results, 5);
        assert_eq!(settings.transcript.ytdlp_bin, "yt-dlp");
        assert_eq!(settings.general.log_level, "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [search]
            provider = "serpapi"
            max_results = 3
            "#,
        )
        .unwrap();

        assert_eq!(settings.search.provider, SearchProvider::SerpApi);
        assert_eq!(settings.search.max_results, 3);
        assert_eq!(settings.transcript.http_timeout_seconds, 30);
    }

    #[test]
    fn test_configured_api_key_wins() {
        let settings = SearchSettings {
            api_key: Some("key-from-file".to_string()),
            ..Default::default()
        };
        assert_eq!(
            settings.resolved_api_key().as_deref(),
            Some("key-from-file")
        );
    }

    #[test]
    fn test_empty_api_key_is_treated_as_unset() {
        let settings = SearchSettings {
            api_key: Some(String::new()),
            ..Default::default()
        };
        // Falls through to the environment; either way, never the empty string.
        assert_ne!(settings.resolved_api_key().as_deref(), Some(""));
    }
}
