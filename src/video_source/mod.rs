//! Video source abstraction for Notat.
//!
//! Provides a trait-based interface for fetching video metadata and caption
//! transcripts. YouTube is the only production source; tests supply stubs.

mod captions;
mod youtube;

pub use captions::TRANSCRIPT_UNAVAILABLE;
pub use youtube::YoutubeClient;

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about a video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetadata {
    /// Unique identifier.
    pub id: String,
    /// Title, as returned by the source (not yet sanitized).
    pub title: String,
    /// Description (if available).
    pub description: Option<String>,
    /// Channel or author name (if available).
    pub channel: Option<String>,
    /// Publication date (if available).
    pub published_at: Option<DateTime<Utc>>,
    /// URL of the video.
    pub source_url: String,
    /// Thumbnail URL (if available).
    pub thumbnail_url: Option<String>,
}

impl VideoMetadata {
    /// Canonical watch URL for a video ID.
    pub fn watch_url(id: &str) -> String {
        format!("https://www.youtube.com/watch?v={}", id)
    }
}

/// Trait for video source providers.
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Fetch metadata for a video by ID.
    async fn fetch_metadata(&self, id: &str) -> Result<VideoMetadata>;

    /// Fetch the caption transcript for a video by ID, as one plain string.
    async fn fetch_transcript(&self, id: &str) -> Result<String>;

    /// Check if this source can handle the given input.
    fn can_handle(&self, input: &str) -> bool;

    /// Extract ID from input (URL or bare ID).
    fn extract_id(&self, input: &str) -> Option<String>;
}
