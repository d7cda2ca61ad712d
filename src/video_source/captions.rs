//! Caption transcript fetching.
//!
//! Resolves a video's caption tracks through the innertube player endpoint,
//! picks a track by language preference, and flattens the json3 caption
//! payload into one plain string.

use crate::error::{NotatError, Result};
use tracing::debug;
use url::Url;

/// Error message for videos without usable captions.
pub const TRANSCRIPT_UNAVAILABLE: &str = "No transcript available for this video. The video \
     may not have captions or they may not be accessible through the public API.";

const PLAYER_ENDPOINT: &str = "https://www.youtube.com/youtubei/v1/player";

/// A caption track offered for a video.
struct CaptionTrack {
    language: String,
    base_url: String,
}

/// Fetch a video's transcript as a single whitespace-normalized string.
pub(super) async fn fetch_transcript(
    http: &reqwest::Client,
    video_id: &str,
    languages: &[String],
) -> Result<String> {
    let tracks = list_caption_tracks(http, video_id).await?;

    let track = pick_track(&tracks, languages)
        .ok_or_else(|| NotatError::Transcript(TRANSCRIPT_UNAVAILABLE.to_string()))?;

    debug!("Fetching {} captions for video {}", track.language, video_id);

    let text = fetch_track_text(http, &track.base_url).await?;
    if text.is_empty() {
        return Err(NotatError::Transcript(TRANSCRIPT_UNAVAILABLE.to_string()));
    }

    Ok(text)
}

/// List the caption tracks the player reports for a video.
async fn list_caption_tracks(
    http: &reqwest::Client,
    video_id: &str,
) -> Result<Vec<CaptionTrack>> {
    let body = serde_json::json!({
        "context": {
            "client": {
                "clientName": "ANDROID",
                "clientVersion": "20.10.38",
            }
        },
        "videoId": video_id,
    });

    let response = http.post(PLAYER_ENDPOINT).json(&body).send().await?;
    if !response.status().is_success() {
        return Err(NotatError::VideoSource(format!(
            "Player endpoint returned {}",
            response.status()
        )));
    }

    let json: serde_json::Value = response.json().await?;

    let tracks = json["captions"]["playerCaptionsTracklistRenderer"]["captionTracks"]
        .as_array()
        .map(|tracks| {
            tracks
                .iter()
                .filter_map(|t| {
                    Some(CaptionTrack {
                        language: t["languageCode"].as_str()?.to_string(),
                        base_url: t["baseUrl"].as_str()?.to_string(),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(tracks)
}

/// Pick a track by preference order, falling back to the first available.
fn pick_track<'a>(tracks: &'a [CaptionTrack], languages: &[String]) -> Option<&'a CaptionTrack> {
    for language in languages {
        if let Some(track) = tracks.iter().find(|t| &t.language == language) {
            return Some(track);
        }
    }
    tracks.first()
}

/// Fetch a caption track in json3 format and flatten it to text.
async fn fetch_track_text(http: &reqwest::Client, base_url: &str) -> Result<String> {
    let mut url = Url::parse(base_url)
        .map_err(|e| NotatError::Transcript(format!("Bad caption URL: {}", e)))?;
    url.query_pairs_mut().append_pair("fmt", "json3");

    let response = http.get(url).send().await?;
    if !response.status().is_success() {
        return Err(NotatError::VideoSource(format!(
            "Caption endpoint returned {}",
            response.status()
        )));
    }

    let json: serde_json::Value = response.json().await?;
    Ok(flatten_events(&json))
}

/// Concatenate json3 caption events into one normalized string.
fn flatten_events(json: &serde_json::Value) -> String {
    let mut text = String::new();

    if let Some(events) = json["events"].as_array() {
        for event in events {
            if let Some(segs) = event["segs"].as_array() {
                for seg in segs {
                    if let Some(s) = seg["utf8"].as_str() {
                        text.push_str(s);
                    }
                }
                text.push(' ');
            }
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(language: &str) -> CaptionTrack {
        CaptionTrack {
            language: language.to_string(),
            base_url: format!("https://example.com/{}", language),
        }
    }

    #[test]
    fn test_pick_track_prefers_language_order() {
        let tracks = vec![track("de"), track("en-GB"), track("en")];
        let languages = vec!["en".to_string(), "en-GB".to_string()];

        let picked = pick_track(&tracks, &languages).unwrap();
        assert_eq!(picked.language, "en");
    }

    #[test]
    fn test_pick_track_falls_back_to_first() {
        let tracks = vec![track("ja"), track("ko")];
        let languages = vec!["en".to_string()];

        let picked = pick_track(&tracks, &languages).unwrap();
        assert_eq!(picked.language, "ja");
    }

    #[test]
    fn test_pick_track_empty() {
        assert!(pick_track(&[], &["en".to_string()]).is_none());
    }

    #[test]
    fn test_flatten_events() {
        let json = serde_json::json!({
            "events": [
                { "segs": [ { "utf8": "hello " }, { "utf8": "there" } ] },
                { "tStartMs": 1200 },
                { "segs": [ { "utf8": "general\nkenobi" } ] },
            ]
        });

        assert_eq!(flatten_events(&json), "hello there general kenobi");
    }

    #[test]
    fn test_flatten_events_empty_payload() {
        assert_eq!(flatten_events(&serde_json::json!({})), "");
    }
}
