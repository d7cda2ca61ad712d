//! Pipeline coordination for Notat.
//!
//! Coordinates the entire process from input URL to written note.

use crate::config::Settings;
use crate::error::{NotatError, Result};
use crate::note;
use crate::summarize::{self, SummaryKind};
use crate::video_source::{VideoSource, YoutubeClient, TRANSCRIPT_UNAVAILABLE};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// The main pipeline from video input to Obsidian note.
pub struct Pipeline {
    settings: Settings,
    source: Arc<dyn VideoSource>,
}

impl Pipeline {
    /// Create a pipeline backed by the YouTube source.
    pub fn new(settings: Settings) -> Self {
        let source = Arc::new(YoutubeClient::new(&settings.youtube));
        Self::with_source(settings, source)
    }

    /// Create a pipeline with a custom video source.
    pub fn with_source(settings: Settings, source: Arc<dyn VideoSource>) -> Self {
        Self { settings, source }
    }

    /// Get the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Process a video: fetch metadata and transcript, summarize, write note.
    #[instrument(skip(self), fields(input = %input))]
    pub async fn process(
        &self,
        input: &str,
        guidance: Option<&str>,
        force: bool,
    ) -> Result<ProcessResult> {
        let video_id = self.source.extract_id(input).ok_or_else(|| {
            NotatError::InvalidInput(format!("Could not parse input: {}", input))
        })?;

        info!("Fetching metadata for {}", video_id);
        let metadata = self.source.fetch_metadata(&video_id).await?;

        let filename = note::safe_filename(&metadata.title, ".md");
        let notes_dir = self.settings.notes_dir();

        if !force && note::note_exists(&notes_dir, &filename) {
            info!("Note for {} already exists, skipping", video_id);
            return Ok(ProcessResult {
                video_id,
                title: metadata.title,
                note_path: notes_dir.join(&filename),
                summary_type: None,
                skipped: true,
            });
        }

        info!("Fetching transcript for {}", video_id);
        // A caption-less video still gets a note; the summarizer turns the
        // marker text into a structured unavailable result.
        let transcript = match self.source.fetch_transcript(&video_id).await {
            Ok(text) => text,
            Err(NotatError::Transcript(message)) => {
                warn!("Transcript unavailable for {}: {}", video_id, message);
                TRANSCRIPT_UNAVAILABLE.to_string()
            }
            Err(e) => return Err(e),
        };

        let summary = summarize::summarize(&transcript, &metadata.title, guidance);
        info!("Produced {} summary for {}", summary.summary_type, video_id);

        let content = note::render_note(&metadata, &summary, &self.settings.note);
        let note_path = note::write_note(&notes_dir, &filename, &content, force)?;

        Ok(ProcessResult {
            video_id: metadata.id,
            title: metadata.title,
            note_path,
            summary_type: Some(summary.summary_type),
            skipped: false,
        })
    }
}

/// Result of processing a video.
#[derive(Debug)]
pub struct ProcessResult {
    /// Video ID.
    pub video_id: String,
    /// Title, as returned by the source.
    pub title: String,
    /// Where the note lives.
    pub note_path: PathBuf,
    /// Which summary shape was produced; None when skipped.
    pub summary_type: Option<SummaryKind>,
    /// Whether processing was skipped (note already present).
    pub skipped: bool,
}
