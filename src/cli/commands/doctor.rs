//! Doctor command - verify configuration and environment.

use crate::cli::Output;
use crate::config::Settings;
use console::style;
use std::io::Write;

/// Outcome of a single diagnostic probe.
#[derive(Debug, PartialEq)]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}

/// One diagnostic line with an optional fix-it hint.
#[derive(Debug)]
struct CheckResult {
    name: &'static str,
    status: CheckStatus,
    message: String,
    hint: Option<String>,
}

impl CheckResult {
    fn ok(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            status: CheckStatus::Ok,
            message: message.into(),
            hint: None,
        }
    }

    fn warning(name: &'static str, message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            name,
            status: CheckStatus::Warning,
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    fn error(name: &'static str, message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            name,
            status: CheckStatus::Error,
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };
        println!("  {} {} - {}", icon, style(self.name).bold(), self.message);
        if let Some(hint) = &self.hint {
            Output::hint(hint);
        }
    }
}

/// Run all diagnostic checks.
pub fn run_doctor(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Notat Doctor");
    println!();

    let sections = [
        ("API Configuration", check_api_key(settings)),
        ("Notes Directory", check_notes_dir(settings)),
        ("Configuration", check_config_file()),
    ];

    let mut errors = 0;
    let mut warnings = 0;
    for (title, check) in &sections {
        println!("{}", style(*title).bold());
        check.print();
        println!();

        match check.status {
            CheckStatus::Error => errors += 1,
            CheckStatus::Warning => warnings += 1,
            CheckStatus::Ok => {}
        }
    }

    if errors > 0 {
        Output::error(&format!(
            "{} error(s) found. Fix them before using Notat.",
            errors
        ));
        std::process::exit(1);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! Notat is ready to use.");
    }

    Ok(())
}

/// An API key from config or environment, loosely shape-checked.
fn check_api_key(settings: &Settings) -> CheckResult {
    match settings.youtube.resolved_api_key() {
        Some(key) if key.len() > 8 => CheckResult::ok(
            "YouTube API key",
            format!("configured ({}...{})", &key[..4], &key[key.len() - 4..]),
        ),
        Some(_) => CheckResult::warning(
            "YouTube API key",
            "set but unusually short",
            "Expected a YouTube Data API v3 key from the Google Cloud console",
        ),
        None => CheckResult::error(
            "YouTube API key",
            "not set",
            "Set with: export YOUTUBE_API_KEY='...' (or [youtube] api_key in the config)",
        ),
    }
}

/// The notes directory must accept writes; probe with a scratch file.
fn check_notes_dir(settings: &Settings) -> CheckResult {
    let notes_dir = settings.notes_dir();
    if !notes_dir.exists() {
        return CheckResult::warning(
            "Notes directory",
            format!("{} (will be created on first use)", notes_dir.display()),
            "Create it now with: notat init",
        );
    }

    let probe = tempfile::NamedTempFile::new_in(&notes_dir)
        .and_then(|mut file| file.write_all(b"notat").map(|_| file));

    match probe {
        Ok(_) => CheckResult::ok(
            "Notes directory",
            format!("{} (writable)", notes_dir.display()),
        ),
        Err(e) => CheckResult::error(
            "Notes directory",
            format!("{} is not writable: {}", notes_dir.display(), e),
            "Check permissions or point general.notes_dir somewhere else",
        ),
    }
}

/// The config file is optional; a present but unparsable one is an error.
fn check_config_file() -> CheckResult {
    let config_path = Settings::default_config_path();
    if !config_path.exists() {
        return CheckResult::warning(
            "Config file",
            "not present, using defaults",
            "Create one with: notat init (or notat config edit)",
        );
    }

    match Settings::load_from(Some(&config_path)) {
        Ok(_) => CheckResult::ok("Config file", config_path.display().to_string()),
        Err(e) => CheckResult::error(
            "Config file",
            format!("{} fails to parse", config_path.display()),
            e.to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_is_masked() {
        let mut settings = Settings::default();
        settings.youtube.api_key = Some("AIzaSyExampleKey123".to_string());

        let result = check_api_key(&settings);
        assert_eq!(result.status, CheckStatus::Ok);
        assert!(result.message.contains("AIza"));
        assert!(!result.message.contains("ExampleKey"));
    }

    #[test]
    fn test_short_api_key_warns() {
        let mut settings = Settings::default();
        settings.youtube.api_key = Some("short".to_string());

        assert_eq!(check_api_key(&settings).status, CheckStatus::Warning);
    }

    #[test]
    fn test_writable_notes_dir_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.general.notes_dir = dir.path().to_string_lossy().to_string();

        assert_eq!(check_notes_dir(&settings).status, CheckStatus::Ok);
    }

    #[test]
    fn test_missing_notes_dir_warns() {
        let mut settings = Settings::default();
        settings.general.notes_dir = "/nonexistent/notat-notes".to_string();

        assert_eq!(check_notes_dir(&settings).status, CheckStatus::Warning);
    }
}
