//! Notat - YouTube videos into Obsidian notes
//!
//! A local-first CLI tool that fetches a YouTube video's metadata and
//! transcript, produces a heuristic extractive summary, and writes an
//! Obsidian-style markdown note.
//!
//! The name "Notat" comes from the Norwegian word for "note."
//!
//! # Overview
//!
//! Notat allows you to:
//! - Fetch video metadata and captions straight from YouTube
//! - Summarize transcripts locally, with no LLM and no API cost
//! - Steer the summary with free-form guidance text
//! - Drop ready-made markdown notes into an Obsidian vault
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `video_source` - Video source abstraction (metadata + transcripts)
//! - `summarize` - Extractive summarization heuristics
//! - `note` - Title sanitization, note rendering, and file writing
//! - `pipeline` - Coordination from input URL to written note
//!
//! # Example
//!
//! ```rust,no_run
//! use notat::config::Settings;
//! use notat::pipeline::Pipeline;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let pipeline = Pipeline::new(settings);
//!
//!     let result = pipeline.process("dQw4w9WgXcQ", None, false).await?;
//!     println!("Wrote {}", result.note_path.display());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod note;
pub mod pipeline;
pub mod summarize;
pub mod video_source;

pub use error::{NotatError, Result};
