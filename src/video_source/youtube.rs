//! YouTube source implementation.
//!
//! Metadata comes from the YouTube Data API v3; transcripts come from the
//! public caption endpoints (see `captions`).

use super::{captions, VideoMetadata, VideoSource};
use crate::config::YoutubeSettings;
use crate::error::{NotatError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use tracing::debug;

/// YouTube client for metadata and transcripts.
pub struct YoutubeClient {
    http: reqwest::Client,
    api_key: Option<String>,
    languages: Vec<String>,
    video_id_regex: Regex,
    bare_id_regex: Regex,
}

impl YoutubeClient {
    pub fn new(settings: &YoutubeSettings) -> Self {
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

        let bare_id_regex = Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("Invalid regex");

        Self {
            http: reqwest::Client::new(),
            api_key: settings.resolved_api_key(),
            languages: settings.languages.clone(),
            video_id_regex,
            bare_id_regex,
        }
    }

    /// Extract video ID from a YouTube URL or bare ID.
    fn extract_video_id(&self, input: &str) -> Option<String> {
        let caps = self.video_id_regex.captures(input.trim())?;

        // Try group 1 (URL format) then group 2 (bare ID)
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
    }

    /// Reject anything that isn't an 11-character YouTube ID.
    fn validate_video_id(&self, video_id: &str) -> Result<()> {
        if self.bare_id_regex.is_match(video_id) {
            Ok(())
        } else {
            Err(NotatError::InvalidInput(format!(
                "Invalid YouTube video ID format: {}",
                video_id
            )))
        }
    }

    /// Fetch metadata from the Data API v3 videos endpoint.
    async fn fetch_metadata_api(&self, video_id: &str) -> Result<VideoMetadata> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            NotatError::Config(
                "YouTube API key not set. Add it to the config file or set YOUTUBE_API_KEY."
                    .to_string(),
            )
        })?;

        let url = format!(
            "https://www.googleapis.com/youtube/v3/videos?part=snippet&id={}&key={}",
            video_id, api_key
        );

        debug!("Fetching metadata for video {}", video_id);

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(NotatError::Metadata(format!(
                "YouTube Data API returned {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response.json().await?;

        let items = json["items"].as_array();
        if items.map_or(true, |i| i.is_empty()) {
            return Err(NotatError::VideoNotFound(video_id.to_string()));
        }

        let snippet = &json["items"][0]["snippet"];

        let title = snippet["title"]
            .as_str()
            .unwrap_or("Unknown Title")
            .to_string();

        let description = snippet["description"].as_str().map(|s| s.to_string());

        let channel = snippet["channelTitle"].as_str().map(|s| s.to_string());

        let published_at = snippet["publishedAt"]
            .as_str()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|d| d.with_timezone(&Utc));

        let thumbnail = snippet["thumbnails"]["high"]["url"]
            .as_str()
            .or_else(|| snippet["thumbnails"]["default"]["url"].as_str())
            .map(|s| s.to_string());

        Ok(VideoMetadata {
            id: video_id.to_string(),
            title,
            description,
            channel,
            published_at,
            source_url: VideoMetadata::watch_url(video_id),
            thumbnail_url: thumbnail,
        })
    }
}

impl Default for YoutubeClient {
    fn default() -> Self {
        Self::new(&YoutubeSettings::default())
    }
}

#[async_trait]
impl VideoSource for YoutubeClient {
    async fn fetch_metadata(&self, id: &str) -> Result<VideoMetadata> {
        self.validate_video_id(id)?;
        self.fetch_metadata_api(id).await
    }

    async fn fetch_transcript(&self, id: &str) -> Result<String> {
        self.validate_video_id(id)?;
        captions::fetch_transcript(&self.http, id, &self.languages).await
    }

    fn can_handle(&self, input: &str) -> bool {
        self.extract_video_id(input).is_some()
    }

    fn extract_id(&self, input: &str) -> Option<String> {
        self.extract_video_id(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_id() {
        let client = YoutubeClient::default();

        // Test various URL formats
        assert_eq!(
            client.extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            client.extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            client.extract_video_id("https://youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            client.extract_video_id("dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );

        // Test invalid inputs
        assert_eq!(client.extract_video_id("not-a-video-id"), None);
        assert_eq!(client.extract_video_id(""), None);
    }

    #[test]
    fn test_validate_video_id() {
        let client = YoutubeClient::default();

        assert!(client.validate_video_id("dQw4w9WgXcQ").is_ok());
        assert!(client.validate_video_id("too-short").is_err());
        assert!(client.validate_video_id("way-too-long-for-an-id").is_err());
        assert!(client.validate_video_id("bad chars!!").is_err());
    }

    #[test]
    fn test_can_handle() {
        let client = YoutubeClient::default();

        assert!(client.can_handle("dQw4w9WgXcQ"));
        assert!(client.can_handle("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(!client.can_handle("/path/to/video.mp4"));
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            VideoMetadata::watch_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }
}
