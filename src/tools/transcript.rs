//! Video transcript retrieval tool.
//!
//! Resolves a transcript in four steps: fetch caption metadata for the URL
//! (on the blocking pool, so a slow extractor never stalls other concurrent
//! tool invocations), select an English track (manual captions win over
//! auto-generated), fetch that track's JSON payload, and concatenate the
//! segment text in event order. A video without English captions is a
//! negative outcome, not an error; no payload fetch happens in that case.

use crate::config::TranscriptSettings;
use crate::error::{HentError, Result};
use crate::fetch::{HttpFetcher, JsonFetcher};
use crate::tool::{InputSchema, PropertyType, Tool, ToolInput, ToolResult};
use crate::transcript::{
    assemble_transcript, CaptionPayload, ExtractOptions, MetadataExtractor, VideoMetadata,
    YtDlpExtractor,
};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Retrieves the English transcript of a YouTube video.
pub struct TranscriptTool {
    extractor: Arc<dyn MetadataExtractor>,
    fetcher: Arc<dyn JsonFetcher>,
    options: ExtractOptions,
}

impl TranscriptTool {
    /// Create a transcript tool with the default yt-dlp extractor and HTTP
    /// fetcher.
    pub fn new() -> Self {
        Self::with_collaborators(Arc::new(YtDlpExtractor::new()), Arc::new(HttpFetcher::new()))
    }

    /// Create a transcript tool from settings.
    pub fn from_settings(settings: &TranscriptSettings) -> Self {
        Self::with_collaborators(
            Arc::new(YtDlpExtractor::with_binary(&settings.ytdlp_binary())),
            Arc::new(HttpFetcher::with_timeout(Duration::from_secs(
                settings.http_timeout_seconds,
            ))),
        )
    }

    /// Create a transcript tool with injected collaborators.
    pub fn with_collaborators(
        extractor: Arc<dyn MetadataExtractor>,
        fetcher: Arc<dyn JsonFetcher>,
    ) -> Self {
        Self {
            extractor,
            fetcher,
            options: ExtractOptions::default(),
        }
    }

    async fn fetch_metadata(&self, url: &str) -> Result<VideoMetadata> {
        let extractor = Arc::clone(&self.extractor);
        let options = self.options.clone();
        let url = url.to_string();

        // Extraction shells out and may take seconds; keep it off the
        // async scheduler.
        tokio::task::spawn_blocking(move || extractor.extract(&url, &options))
            .await
            .map_err(|e| HentError::Extraction(format!("Extractor task failed: {}", e)))?
    }

    /// Resolve the transcript text, or `None` when the video has no English
    /// caption tracks.
    async fn fetch_transcript(&self, url: &str) -> Result<Option<String>> {
        let metadata = self.fetch_metadata(url).await?;

        let Some((track, kind)) = metadata.select_track() else {
            return Ok(None);
        };
        debug!(url, ?kind, "Selected caption track");

        let payload = self.fetcher.get_json(&track.fetch_url).await?;
        let payload: CaptionPayload = serde_json::from_value(payload)?;

        Ok(Some(assemble_transcript(&payload)))
    }
}

impl Default for TranscriptTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for TranscriptTool {
    fn name(&self) -> &str {
        "youtube_video_transcript"
    }

    fn description(&self) -> &str {
        "Retrieves and returns the transcript of a YouTube video. Supports both manually \
         created subtitles and automatically generated captions, prioritizing manual \
         subtitles when available."
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::new().required_field("url", PropertyType::String, "YouTube video URL")
    }

    async fn run(&self, input: &ToolInput) -> ToolResult {
        let url = match input.get_str("url") {
            Ok(url) => url,
            Err(e) => return ToolResult::failure(e.to_string(), "Invalid transcript input"),
        };

        match self.fetch_transcript(url).await {
            Ok(Some(transcript)) => {
                debug!(url, chars = transcript.len(), "Transcript assembled");
                ToolResult::success(transcript, "Successfully extracted transcript")
            }
            Ok(None) => ToolResult::failure(
                "No subtitles available for the requested language.",
                "No subtitles found",
            ),
            Err(e) => {
                warn!(url, error = %e, "Transcript retrieval failed");
                ToolResult::failure(
                    format!("Error fetching subtitles: {}", e),
                    "Failed to extract transcript",
                )
                .with_diagnostics(json!({ "error": e.to_string() }))
            }
        }
    }
}
