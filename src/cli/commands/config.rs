//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use anyhow::{bail, Result};

/// Run the config command.
pub fn run_config(action: &ConfigAction, settings: Settings) -> Result<()> {
    match action {
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(&settings)?);
        }

        ConfigAction::Set { key, value } => {
            let mut settings = settings;
            apply_setting(&mut settings, key, value)?;
            settings.save()?;
            Output::success(&format!("Set {} = {}", key, value));
            Output::hint(&format!(
                "Saved to {}",
                Settings::default_config_path().display()
            ));
        }

        ConfigAction::Edit => {
            let config_path = Settings::default_config_path();
            if !config_path.exists() {
                settings.save()?;
                Output::info(&format!("Created default config at {}", config_path.display()));
            }

            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            let status = std::process::Command::new(&editor).arg(&config_path).status();

            match status {
                Ok(s) if s.success() => Output::success("Config updated."),
                Ok(_) => Output::warning("Editor exited with non-zero status; config left as-is."),
                Err(e) => {
                    Output::error(&format!("Could not launch {}: {}", editor, e));
                    Output::hint(&format!("Config file is at {}", config_path.display()));
                }
            }
        }

        ConfigAction::Path => {
            println!("{}", Settings::default_config_path().display());
        }
    }

    Ok(())
}

/// Apply a dotted key like `general.notes_dir` to the settings struct.
///
/// List-valued keys take comma-separated values.
fn apply_setting(settings: &mut Settings, key: &str, value: &str) -> Result<()> {
    match key {
        "general.notes_dir" => settings.general.notes_dir = value.to_string(),
        "general.log_level" => settings.general.log_level = value.to_string(),
        "youtube.api_key" => settings.youtube.api_key = Some(value.to_string()),
        "youtube.languages" => settings.youtube.languages = split_list(value),
        "note.tags" => settings.note.tags = split_list(value),
        "note.include_description" => {
            settings.note.include_description = value
                .parse()
                .map_err(|_| anyhow::anyhow!("Expected true or false, got: {}", value))?;
        }
        _ => bail!(
            "Unknown configuration key: {}. Run 'notat config show' to see available keys.",
            key
        ),
    }
    Ok(())
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
