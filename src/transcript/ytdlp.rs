//! yt-dlp metadata extraction.

use super::{ExtractOptions, MetadataExtractor, VideoMetadata};
use crate::error::{HentError, Result};
use regex::Regex;
use std::process::Command;
use tracing::debug;

/// Metadata extractor backed by the `yt-dlp` binary.
///
/// Runs `yt-dlp --dump-json` and deserializes the caption listings from its
/// output. Invocation is blocking; the transcript tool offloads it to the
/// blocking pool.
pub struct YtDlpExtractor {
    binary: String,
    video_id_regex: Regex,
}

impl YtDlpExtractor {
    pub fn new() -> Self {
        Self::with_binary("yt-dlp")
    }

    /// Use a specific binary path instead of resolving `yt-dlp` from PATH.
    pub fn with_binary(binary: &str) -> Self {
        // Matches various YouTube URL formats and bare video IDs
        let video_id_regex = Regex::new(
            r"(?x)
            (?:
                # Full YouTube URLs
                (?:https?://)?
                (?:www\.)?
                (?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/v/)
                ([a-zA-Z0-9_-]{11})
            )
            |
            # Bare video ID (11 characters)
            ^([a-zA-Z0-9_-]{11})$
        ",
        )
        .expect("Invalid regex");

        Self {
            binary: binary.to_string(),
            video_id_regex,
        }
    }

    /// Extract a video ID from a YouTube URL or bare ID.
    fn extract_video_id(&self, input: &str) -> Option<String> {
        let caps = self.video_id_regex.captures(input.trim())?;

        // Try group 1 (URL format) then group 2 (bare ID)
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
    }

    /// Check if this extractor recognizes the input.
    pub fn can_handle(&self, input: &str) -> bool {
        self.extract_video_id(input).is_some()
    }

    /// Normalize a bare video ID into a watch URL; pass URLs through.
    fn canonical_url(&self, input: &str) -> String {
        match self.extract_video_id(input) {
            Some(id) if !input.contains('/') => {
                format!("https://www.youtube.com/watch?v={}", id)
            }
            _ => input.trim().to_string(),
        }
    }
}

impl Default for YtDlpExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataExtractor for YtDlpExtractor {
    fn extract(&self, url: &str, options: &ExtractOptions) -> Result<VideoMetadata> {
        let url = self.canonical_url(url);

        let mut args = vec!["--dump-json"];
        if options.skip_download {
            args.push("--no-download");
        }
        if options.no_warnings {
            args.push("--no-warnings");
        }
        if options.quiet {
            args.push("--quiet");
        }

        debug!(%url, binary = %self.binary, "Extracting video metadata");

        let output = Command::new(&self.binary)
            .args(&args)
            .arg(&url)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    HentError::ToolNotFound(self.binary.clone())
                } else {
                    HentError::Extraction(format!("Failed to run {}: {}", self.binary, e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HentError::ToolFailed(format!(
                "{} failed for {}: {}",
                self.binary,
                url,
                stderr.trim()
            )));
        }

        let metadata: VideoMetadata = serde_json::from_slice(&output.stdout).map_err(|e| {
            HentError::Extraction(format!("Failed to parse {} output: {}", self.binary, e))
        })?;

        Ok(metadata)
    }
}
