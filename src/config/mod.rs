//! Configuration module for Hent.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{
    GeneralSettings, SearchProvider, SearchSettings, Settings, TranscriptSettings,
};
