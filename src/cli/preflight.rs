//! Pre-flight checks before expensive operations.
//!
//! Validates that required configuration is available before starting
//! operations that would otherwise fail midway.

use crate::config::Settings;
use crate::error::{NotatError, Result};

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Processing a video requires a YouTube API key.
    Process,
    /// Summarizing local text has no external requirements.
    Summarize,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(operation: Operation, settings: &Settings) -> Result<()> {
    match operation {
        Operation::Process => {
            check_api_key(settings)?;
        }
        Operation::Summarize => {
            // No external requirements for local summarization
        }
    }
    Ok(())
}

/// Check if a YouTube API key is configured.
fn check_api_key(settings: &Settings) -> Result<()> {
    match settings.youtube.resolved_api_key() {
        Some(_) => Ok(()),
        None => Err(NotatError::Config(
            "YouTube API key not set. Add it to the config file ([youtube] api_key) \
             or set YOUTUBE_API_KEY in your environment."
                .to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_summarize_no_requirements() {
        // Summarize should always pass pre-flight (no external requirements)
        assert!(check(Operation::Summarize, &Settings::default()).is_ok());
    }

    #[test]
    fn test_check_process_with_config_key() {
        let mut settings = Settings::default();
        settings.youtube.api_key = Some("test-key".to_string());
        assert!(check(Operation::Process, &settings).is_ok());
    }
}
