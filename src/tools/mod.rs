//! Agent-facing tool implementations.

mod search;
mod transcript;

pub use search::SearchTool;
pub use transcript::TranscriptTool;
