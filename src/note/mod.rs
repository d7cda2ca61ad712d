//! Obsidian note assembly for Notat.
//!
//! Renders video metadata plus a summary into a markdown note with YAML
//! frontmatter, and writes it into the vault without clobbering existing
//! notes.

mod sanitize;
mod writer;

pub use sanitize::{is_safe_filename, safe_filename, sanitize_title};
pub use writer::{note_exists, write_note};

use crate::config::NoteSettings;
use crate::summarize::Summary;
use crate::video_source::VideoMetadata;
use chrono::NaiveDate;

/// Render a markdown note for a video.
pub fn render_note(metadata: &VideoMetadata, summary: &Summary, settings: &NoteSettings) -> String {
    render_note_with_date(metadata, summary, settings, chrono::Local::now().date_naive())
}

/// Render a markdown note with an explicit creation date.
pub fn render_note_with_date(
    metadata: &VideoMetadata,
    summary: &Summary,
    settings: &NoteSettings,
    created: NaiveDate,
) -> String {
    let title = sanitize_title(&metadata.title);

    let mut note = String::from("---\n");
    note.push_str(&format!("title: \"{}\"\n", escape_yaml(&title)));
    note.push_str(&format!("source: {}\n", metadata.source_url));
    note.push_str(&format!("video_id: {}\n", metadata.id));

    if let Some(channel) = &metadata.channel {
        note.push_str(&format!("channel: \"{}\"\n", escape_yaml(channel)));
    }
    if let Some(published) = &metadata.published_at {
        note.push_str(&format!("published: {}\n", published.format("%Y-%m-%d")));
    }

    note.push_str(&format!("created: {}\n", created.format("%Y-%m-%d")));
    note.push_str(&format!("summary_type: {}\n", summary.summary_type));

    if !settings.tags.is_empty() {
        note.push_str("tags:\n");
        for tag in &settings.tags {
            note.push_str(&format!("  - {}\n", tag));
        }
    }

    note.push_str("---\n\n");
    note.push_str(&format!("# {}\n\n", title));
    note.push_str(&summary.summary);
    note.push('\n');

    if settings.include_description {
        if let Some(description) = metadata.description.as_deref().filter(|d| !d.trim().is_empty())
        {
            note.push_str(&format!("\n## Description\n\n{}\n", description.trim()));
        }
    }

    note
}

/// Escape double quotes for a quoted YAML scalar.
fn escape_yaml(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarize::{summarize, SummaryKind};
    use chrono::{TimeZone, Utc};

    fn metadata() -> VideoMetadata {
        VideoMetadata {
            id: "dQw4w9WgXcQ".to_string(),
            title: "Talk: The Big Ideas [HD]".to_string(),
            description: Some("A talk about ideas.".to_string()),
            channel: Some("The \"Best\" Channel".to_string()),
            published_at: Some(Utc.with_ymd_and_hms(2009, 10, 25, 6, 57, 33).unwrap()),
            source_url: VideoMetadata::watch_url("dQw4w9WgXcQ"),
            thumbnail_url: None,
        }
    }

    fn summary() -> Summary {
        summarize(
            "This is important. We discuss three points. First, clarity matters. \
             Second, brevity helps. Finally, remember the main idea.",
            "Talk",
            None,
        )
    }

    #[test]
    fn test_frontmatter_fields() {
        let note = render_note_with_date(
            &metadata(),
            &summary(),
            &NoteSettings::default(),
            NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
        );

        assert!(note.starts_with("---\n"));
        assert!(note.contains("title: \"Talk- The Big Ideas HD\"\n"));
        assert!(note.contains("source: https://www.youtube.com/watch?v=dQw4w9WgXcQ\n"));
        assert!(note.contains("video_id: dQw4w9WgXcQ\n"));
        assert!(note.contains("channel: \"The \\\"Best\\\" Channel\"\n"));
        assert!(note.contains("published: 2009-10-25\n"));
        assert!(note.contains("created: 2026-08-04\n"));
        assert!(note.contains("summary_type: key_points\n"));
        assert!(note.contains("tags:\n  - youtube\n  - video-notes\n"));
    }

    #[test]
    fn test_body_sections() {
        let note = render_note_with_date(
            &metadata(),
            &summary(),
            &NoteSettings::default(),
            NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
        );

        assert!(note.contains("# Talk- The Big Ideas HD\n"));
        assert!(note.contains("## Key Points\n"));
        assert!(note.contains("## Description\n\nA talk about ideas.\n"));
    }

    #[test]
    fn test_description_can_be_disabled() {
        let settings = NoteSettings {
            include_description: false,
            ..NoteSettings::default()
        };
        let note = render_note_with_date(
            &metadata(),
            &summary(),
            &settings,
            NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
        );

        assert!(!note.contains("## Description"));
    }

    #[test]
    fn test_missing_optional_fields_are_omitted() {
        let mut meta = metadata();
        meta.channel = None;
        meta.published_at = None;
        meta.description = None;

        let note = render_note_with_date(
            &meta,
            &summary(),
            &NoteSettings::default(),
            NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
        );

        assert!(!note.contains("channel:"));
        assert!(!note.contains("published:"));
        assert!(!note.contains("## Description"));
    }

    #[test]
    fn test_unavailable_summary_still_renders() {
        let summary = summarize("", "Talk", None);
        assert_eq!(summary.summary_type, SummaryKind::Unavailable);

        let note = render_note_with_date(
            &metadata(),
            &summary,
            &NoteSettings::default(),
            NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
        );

        assert!(note.contains("summary_type: unavailable\n"));
        assert!(note.contains("No transcript is available"));
    }
}
