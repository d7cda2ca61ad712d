//! Video title sanitization for display and filesystem use.

use regex::Regex;
use std::sync::OnceLock;

const MAX_TITLE_LEN: usize = 100;

/// Windows reserved device names, rejected as filenames.
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Invalid filename characters and control characters.
fn invalid_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[<>:"/\\|?*\x00-\x1f\x7f-\x9f]"#).expect("Invalid regex"))
}

/// Emoji blocks, misc symbols, and general punctuation.
fn symbol_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"[\x{1F600}-\x{1F64F}\x{1F300}-\x{1F5FF}\x{1F680}-\x{1F6FF}\x{1F1E0}-\x{1F1FF}\x{2600}-\x{26FF}\x{2000}-\x{206F}]",
        )
        .expect("Invalid regex")
    })
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("Invalid regex"))
}

/// Sanitize a video title for use in filenames and display.
///
/// Strips brackets, replaces colons with hyphens, removes characters that are
/// invalid in filenames along with emoji and symbol blocks, collapses
/// whitespace, and truncates to 100 characters.
pub fn sanitize_title(title: &str) -> String {
    let title = title.replace(['[', ']'], "");
    let title = title.replace(':', "-");
    let title = invalid_chars().replace_all(&title, "");
    let title = symbol_chars().replace_all(&title, "");
    let title = whitespace_runs().replace_all(&title, " ");

    title.trim().chars().take(MAX_TITLE_LEN).collect()
}

/// Check if a title is safe for use as a filename.
pub fn is_safe_filename(title: &str) -> bool {
    if invalid_chars().is_match(title) {
        return false;
    }

    !RESERVED_NAMES.contains(&title.to_uppercase().as_str())
}

/// Create a safe filename from a title, with extension.
pub fn safe_filename(title: &str, extension: &str) -> String {
    let sanitized = sanitize_title(title);

    let sanitized = if sanitized.trim_matches(['-', '_', ' ']).is_empty() {
        "untitled".to_string()
    } else {
        sanitized
    };

    if extension.starts_with('.') {
        format!("{}{}", sanitized, extension)
    } else {
        format!("{}.{}", sanitized, extension)
    }
}
