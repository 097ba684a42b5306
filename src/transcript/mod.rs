//! Caption metadata, track selection, and transcript assembly.
//!
//! A video's metadata lists caption tracks in two maps keyed by language
//! code: manually authored subtitles and auto-generated captions. Transcript
//! resolution picks one English track (manual wins), fetches its JSON
//! payload, and concatenates the segment text in event order.

mod ytdlp;

pub use ytdlp::YtDlpExtractor;

use crate::error::Result;
use serde::Deserialize;
use std::collections::HashMap;

/// Subtitle language consulted for transcripts. Only this key is checked;
/// there is no language negotiation.
pub const SUBTITLE_LANGUAGE: &str = "en";

/// Caption track listings for a video, keyed by language code.
///
/// Field names follow the extractor's JSON output (`subtitles`,
/// `automatic_captions`); other metadata fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoMetadata {
    /// Manually authored subtitle tracks.
    #[serde(default, rename = "subtitles")]
    pub manual_captions: HashMap<String, Vec<CaptionTrackRef>>,
    /// Automatically generated caption tracks.
    #[serde(default, rename = "automatic_captions")]
    pub auto_captions: HashMap<String, Vec<CaptionTrackRef>>,
}

/// Reference to one downloadable caption track variant.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptionTrackRef {
    /// URL the caption payload can be fetched from.
    #[serde(rename = "url")]
    pub fetch_url: String,
}

/// Which caption map a track was selected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionKind {
    Manual,
    Auto,
}

impl VideoMetadata {
    /// Select the caption track to fetch.
    ///
    /// Manual English captions win over auto-generated ones. The first
    /// listed variant is taken as-is; alternates are not inspected.
    pub fn select_track(&self) -> Option<(&CaptionTrackRef, CaptionKind)> {
        if let Some(track) = self
            .manual_captions
            .get(SUBTITLE_LANGUAGE)
            .and_then(|tracks| tracks.first())
        {
            return Some((track, CaptionKind::Manual));
        }

        self.auto_captions
            .get(SUBTITLE_LANGUAGE)
            .and_then(|tracks| tracks.first())
            .map(|track| (track, CaptionKind::Auto))
    }
}

/// Parsed caption payload (YouTube JSON3 shape).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaptionPayload {
    #[serde(default)]
    pub events: Vec<CaptionEvent>,
}

/// One timed caption event. Events without segments carry no text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaptionEvent {
    #[serde(default, rename = "segs")]
    pub segments: Option<Vec<CaptionSegment>>,
}

/// A text fragment within a caption event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaptionSegment {
    #[serde(default, rename = "utf8")]
    pub text: String,
}

/// Concatenate all segment text in event order, with no separators.
pub fn assemble_transcript(payload: &CaptionPayload) -> String {
    let mut transcript = String::new();
    for event in &payload.events {
        if let Some(segments) = &event.segments {
            for segment in segments {
                transcript.push_str(&segment.text);
            }
        }
    }
    transcript
}

/// Options passed to the metadata extractor.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Suppress extractor console output.
    pub quiet: bool,
    /// Suppress extractor warnings.
    pub no_warnings: bool,
    /// List caption tracks without downloading media.
    pub skip_download: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            quiet: true,
            no_warnings: true,
            skip_download: true,
        }
    }
}

/// Trait for metadata extraction backends.
///
/// Extraction is blocking and potentially slow (it shells out and parses a
/// large JSON document); callers run it off the async scheduler via
/// `tokio::task::spawn_blocking`.
pub trait MetadataExtractor: Send + Sync {
    /// Fetch caption metadata for a video URL.
    fn extract(&self, url: &str, options: &ExtractOptions) -> Result<VideoMetadata>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(url: &str) -> CaptionTrackRef {
        CaptionTrackRef {
            fetch_url: url.to_string(),
        }
    }

    #[test]
    fn test_manual_captions_win_over_auto() {
        let mut metadata = VideoMetadata::default();
        metadata
            .manual_captions
            .insert("en".to_string(), vec![track("manual-1"), track("manual-2")]);
        metadata
            .auto_captions
            .insert("en".to_string(), vec![track("auto-1")]);

        let (selected, kind) = metadata.select_track().unwrap();
        assert_eq!(selected.fetch_url, "manual-1");
        assert_eq!(kind, CaptionKind::Manual);
    }

    #[test]
    fn test_falls_back_to_auto_captions() {
        let mut metadata = VideoMetadata::default();
        metadata
            .auto_captions
            .insert("en".to_string(), vec![track("auto-1")]);

        let (selected, kind) = metadata.select_track().unwrap();
        assert_eq!(selected.fetch_url, "auto-1");
        assert_eq!(kind, CaptionKind::Auto);
    }

    #[test]
    fn test_empty_manual_list_falls_back() {
        let mut metadata = VideoMetadata::default();
        metadata.manual_captions.insert("en".to_string(), vec![]);
        metadata
            .auto_captions
            .insert("en".to_string(), vec![track("auto-1")]);

        let (selected, kind) = metadata.select_track().unwrap();
        assert_eq!(selected.fetch_url, "auto-1");
        assert_eq!(kind, CaptionKind::Auto);
    }

    #[test]
    fn test_no_english_tracks_selects_nothing() {
        let mut metadata = VideoMetadata::default();
        metadata
            .manual_captions
            .insert("no".to_string(), vec![track("norsk")]);

        assert!(metadata.select_track().is_none());
    }

    #[test]
    fn test_assemble_concatenates_without_separators() {
        let payload: CaptionPayload = serde_json::from_value(serde_json::json!({
            "events": [
                {"segs": [{"utf8": "A"}]},
                {"segs": [{"utf8": "B"}, {"utf8": "C"}]},
            ]
        }))
        .unwrap();

        assert_eq!(assemble_transcript(&payload), "ABC");
    }

    #[test]
    fn test_events_without_segments_are_skipped() {
        let payload: CaptionPayload = serde_json::from_value(serde_json::json!({
            "events": [
                {"tStartMs": 0, "dDurationMs": 1000},
                {"segs": [{"utf8": "hello"}]},
                {"segs": [{"acAsrConf": 90}]},
                {"segs": [{"utf8": " world"}]},
            ]
        }))
        .unwrap();

        assert_eq!(assemble_transcript(&payload), "hello world");
    }

    #[test]
    fn test_metadata_deserializes_from_extractor_json() {
        let metadata: VideoMetadata = serde_json::from_value(serde_json::json!({
            "id": "dQw4w9WgXcQ",
            "title": "Some Video",
            "subtitles": {
                "en": [{"url": "https://example.com/s.json", "ext": "json3"}]
            },
            "automatic_captions": {}
        }))
        .unwrap();

        let (selected, kind) = metadata.select_track().unwrap();
        assert_eq!(selected.fetch_url, "https://example.com/s.json");
        assert_eq!(kind, CaptionKind::Manual);
    }
}
