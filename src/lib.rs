//! Hent - Agent Tools for Web Search and Video Transcripts
//!
//! A library of agent-callable tools sharing a single invocation contract.
//!
//! The name "Hent" comes from the Norwegian word for "fetch."
//!
//! # Overview
//!
//! Hent provides two tools an agent orchestrator can invoke:
//!
//! - Web search through a pluggable backend (Tavily, SerpAPI)
//! - Transcript retrieval for a video URL, resolved from its caption tracks
//!
//! Every tool declares a name, description, and input schema, and returns a
//! uniform result envelope. Domain failures never escape an invocation; they
//! are folded into a failed envelope with a textual explanation.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `tool` - Shared tool contract (input, schema, result envelope)
//! - `tools` - The tool implementations
//! - `search` - Web search backend abstraction
//! - `transcript` - Caption metadata, extraction, and transcript assembly
//! - `fetch` - JSON-over-HTTP fetching
//!
//! # Example
//!
//! ```rust,no_run
//! use hent::config::Settings;
//! use hent::tool::{Tool, ToolInput};
//! use hent::tools::SearchTool;
//!
//! #[tokio::main]
//! async fn main() -> hent::Result<()> {
//!     let settings = Settings::load()?;
//!     let tool = SearchTool::from_settings(settings.search.max_results, &settings.search)?;
//!
//!     let input = ToolInput::new().with("query", "rust async runtimes");
//!     let result = tool.execute(&input).await?;
//!     println!("{}", result.output);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod search;
pub mod tool;
pub mod tools;
pub mod transcript;

pub use error::{HentError, Result};
pub use tool::{Tool, ToolInput, ToolResult};
