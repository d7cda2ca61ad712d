//! Extractive transcript summarization.
//!
//! Turns a raw caption transcript into a short human-readable summary without
//! calling any external model. Three summary shapes are supported: a numbered
//! key-points list, a condensed detailed summary, and a guidance-adapted
//! variant that echoes the caller's instructions. Malformed input never
//! errors; it degrades to a structured "unavailable" result.
//!
//! The whole operation is a pure function of its inputs: one pass, no I/O,
//! no shared state, safe to call from any number of tasks at once.

mod detailed;
mod key_points;
mod keywords;

use serde::{Deserialize, Serialize};

/// Marker phrase upstream fetchers use for caption-less videos.
pub const NO_TRANSCRIPT_MARKER: &str = "No transcript available for this video";

const UNAVAILABLE_MESSAGE: &str =
    "No transcript is available for this video, so a summary could not be generated.";
const INVALID_INPUT_MESSAGE: &str = "Invalid input: a video title is required.";
const NO_SENTENCES_MESSAGE: &str =
    "Could not extract meaningful sentences from the transcript.";

/// The shape of summary that was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryKind {
    KeyPoints,
    Detailed,
    Guided,
    Unavailable,
}

impl std::fmt::Display for SummaryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryKind::KeyPoints => write!(f, "key_points"),
            SummaryKind::Detailed => write!(f, "detailed"),
            SummaryKind::Guided => write!(f, "guided"),
            SummaryKind::Unavailable => write!(f, "unavailable"),
        }
    }
}

/// A produced summary plus its type label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub summary: String,
    pub summary_type: SummaryKind,
}

impl Summary {
    fn new(summary: impl Into<String>, summary_type: SummaryKind) -> Self {
        Self {
            summary: summary.into(),
            summary_type,
        }
    }

    /// Whether the input could not be summarized at all.
    pub fn is_unavailable(&self) -> bool {
        self.summary_type == SummaryKind::Unavailable
    }
}

/// Summary mode resolved from the caller's guidance.
enum SummaryMode {
    KeyPoints,
    Detailed,
    Guided(String),
}

/// Summarize a transcript.
///
/// With no guidance this produces a key-points list. Guidance is matched
/// against fixed keyword groups to pick a mode; unrecognized guidance falls
/// through to a detailed summary prefixed with a guidance echo.
///
/// Never fails on malformed input: empty or caption-less transcripts and
/// blank titles degrade to an [`SummaryKind::Unavailable`] result.
pub fn summarize(transcript: &str, title: &str, guidance: Option<&str>) -> Summary {
    let transcript = transcript.trim();
    if transcript.is_empty() || transcript.contains(NO_TRANSCRIPT_MARKER) {
        return Summary::new(UNAVAILABLE_MESSAGE, SummaryKind::Unavailable);
    }
    if title.trim().is_empty() {
        return Summary::new(INVALID_INPUT_MESSAGE, SummaryKind::Unavailable);
    }

    match select_mode(guidance) {
        SummaryMode::KeyPoints => match key_points::key_points_summary(transcript) {
            Some(summary) => Summary::new(summary, SummaryKind::KeyPoints),
            None => Summary::new(NO_SENTENCES_MESSAGE, SummaryKind::KeyPoints),
        },
        SummaryMode::Detailed => match detailed::detailed_summary(transcript) {
            Some(draft) => Summary::new(format!("## Summary\n\n{}", draft), SummaryKind::Detailed),
            None => Summary::new(NO_SENTENCES_MESSAGE, SummaryKind::Detailed),
        },
        SummaryMode::Guided(guidance) => match detailed::detailed_summary(transcript) {
            Some(draft) => Summary::new(
                format!("## Summary (Based on: {})\n\n{}", guidance, draft),
                SummaryKind::Guided,
            ),
            None => Summary::new(NO_SENTENCES_MESSAGE, SummaryKind::Guided),
        },
    }
}

/// Map guidance text to a summary mode.
///
/// Groups are checked in a fixed order and the first match wins, so guidance
/// like "short but comprehensive" resolves to key points, not detailed.
fn select_mode(guidance: Option<&str>) -> SummaryMode {
    let guidance = match guidance.map(str::trim) {
        Some(g) if !g.is_empty() => g,
        _ => return SummaryMode::KeyPoints,
    };

    let lowered = guidance.to_lowercase();
    if ["brief", "short", "overview"].iter().any(|k| lowered.contains(k)) {
        return SummaryMode::KeyPoints;
    }
    if ["detailed", "comprehensive", "analysis"]
        .iter()
        .any(|k| lowered.contains(k))
    {
        return SummaryMode::Detailed;
    }
    if ["key", "points", "bullet"].iter().any(|k| lowered.contains(k)) {
        return SummaryMode::KeyPoints;
    }

    SummaryMode::Guided(guidance.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TALK: &str = "This is important. We discuss three points. First, clarity matters. \
                        Second, brevity helps. Finally, remember the main idea.";

    #[test]
    fn test_empty_transcript_is_unavailable() {
        let result = summarize("", "X", None);
        assert_eq!(result.summary_type, SummaryKind::Unavailable);
    }

    #[test]
    fn test_marker_transcript_is_unavailable() {
        let result = summarize("No transcript available for this video.", "X", None);
        assert_eq!(result.summary_type, SummaryKind::Unavailable);
        assert_eq!(result.summary, UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn test_blank_title_is_invalid_input() {
        let result = summarize(TALK, "   ", None);
        assert_eq!(result.summary_type, SummaryKind::Unavailable);
        assert_eq!(result.summary, INVALID_INPUT_MESSAGE);
    }

    #[test]
    fn test_default_mode_is_key_points() {
        let result = summarize(TALK, "Talk", None);
        assert_eq!(result.summary_type, SummaryKind::KeyPoints);
        assert!(result.summary.starts_with("## Key Points"));
        assert!(result.summary.contains("important"));
    }

    #[test]
    fn test_guidance_precedence_brief_beats_detailed() {
        let result = summarize(TALK, "Talk", Some("short but comprehensive"));
        assert_eq!(result.summary_type, SummaryKind::KeyPoints);
    }

    #[test]
    fn test_guidance_detailed_analysis() {
        let result = summarize(TALK, "Talk", Some("detailed analysis please"));
        assert_eq!(result.summary_type, SummaryKind::Detailed);
        assert!(result.summary.starts_with("## Summary\n\n"));
    }

    #[test]
    fn test_guidance_bullet_maps_to_key_points() {
        let result = summarize(TALK, "Talk", Some("bullet the takeaways"));
        assert_eq!(result.summary_type, SummaryKind::KeyPoints);
    }

    #[test]
    fn test_unrecognized_guidance_is_guided() {
        let result = summarize(TALK, "Talk", Some("explain it to a beginner"));
        assert_eq!(result.summary_type, SummaryKind::Guided);
        assert!(result
            .summary
            .starts_with("## Summary (Based on: explain it to a beginner)\n\n"));
    }

    #[test]
    fn test_blank_guidance_treated_as_absent() {
        let result = summarize(TALK, "Talk", Some("   "));
        assert_eq!(result.summary_type, SummaryKind::KeyPoints);
    }

    #[test]
    fn test_no_meaningful_sentences_keeps_mode_label() {
        let result = summarize("Tiny. Bits. Here.", "Talk", None);
        assert_eq!(result.summary_type, SummaryKind::KeyPoints);
        assert_eq!(result.summary, NO_SENTENCES_MESSAGE);

        let result = summarize("Tiny. Bits. Here.", "Talk", Some("detailed"));
        assert_eq!(result.summary_type, SummaryKind::Detailed);
        assert_eq!(result.summary, NO_SENTENCES_MESSAGE);
    }

    #[test]
    fn test_at_most_five_points() {
        let text = (0..60)
            .map(|i| format!("Sentence number {} carries plenty of words", i))
            .collect::<Vec<_>>()
            .join(". ");
        let result = summarize(&text, "Talk", None);
        let points = result.summary.lines().filter(|l| l.contains(". ")).count();
        assert!(points <= 5);
    }

    #[test]
    fn test_idempotent() {
        let a = summarize(TALK, "Talk", Some("something unusual"));
        let b = summarize(TALK, "Talk", Some("something unusual"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_summary_kind_labels() {
        assert_eq!(SummaryKind::KeyPoints.to_string(), "key_points");
        assert_eq!(SummaryKind::Detailed.to_string(), "detailed");
        assert_eq!(SummaryKind::Guided.to_string(), "guided");
        assert_eq!(SummaryKind::Unavailable.to_string(), "unavailable");
    }

    #[test]
    fn test_serde_round_trip() {
        let result = summarize(TALK, "Talk", None);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"summary_type\":\"key_points\""));

        let parsed: Summary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
