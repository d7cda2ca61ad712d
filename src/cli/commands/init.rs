//! Init command - interactive first-run setup.

use crate::cli::Output;
use crate::config::Settings;
use console::style;
use std::io::{self, Write};

/// Run the init command for first-time setup.
pub fn run_init(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Notat Setup");
    println!();
    println!("Welcome to Notat! Let's get you set up.\n");

    // Step 1: API key
    println!("{}", style("Step 1: API configuration").bold().cyan());
    println!();

    if settings.youtube.resolved_api_key().is_some() {
        Output::success("YouTube API key is configured.");
    } else {
        Output::warning("No YouTube API key found.");
        println!();
        println!("  Notat fetches video metadata through the YouTube Data API v3.");
        println!(
            "  Get a key from: {}",
            style("https://console.cloud.google.com/apis/credentials").underlined()
        );
        println!("  Then add it to your shell configuration:");
        println!("  {}", style("export YOUTUBE_API_KEY='...'").green());
        println!();

        if !prompt_continue("Continue without an API key?")? {
            println!();
            Output::info("Setup cancelled. Set your API key and run 'notat init' again.");
            return Ok(());
        }
    }

    println!();

    // Step 2: notes directory
    println!("{}", style("Step 2: Notes directory").bold().cyan());
    println!();

    let notes_dir = settings.notes_dir();
    if notes_dir.exists() {
        Output::info(&format!("Notes directory exists: {}", notes_dir.display()));
    } else {
        std::fs::create_dir_all(&notes_dir)?;
        Output::success(&format!("Created notes directory: {}", notes_dir.display()));
        Output::hint("Point general.notes_dir at your Obsidian vault to drop notes there.");
    }

    println!();

    // Step 3: config file
    println!("{}", style("Step 3: Configuration file").bold().cyan());
    println!();

    let config_path = Settings::default_config_path();
    if config_path.exists() {
        Output::info(&format!("Config file exists: {}", config_path.display()));
    } else if prompt_continue("Write a default configuration file?")? {
        settings.save_to(&config_path)?;
        Output::success(&format!("Created config file: {}", config_path.display()));
        Output::hint("Adjust it any time with: notat config edit");
    } else {
        Output::info("Skipped config file creation. Defaults apply.");
    }

    println!();

    // Summary
    println!("{}", style("Setup complete!").bold().green());
    println!();
    println!("Try these next:");
    println!("  {} check your setup", style("notat doctor").cyan());
    println!("  {} turn a video into a note", style("notat process <url>").cyan());
    println!(
        "  {} summarize a local transcript",
        style("notat summarize -i transcript.txt -t \"Title\"").cyan()
    );

    Ok(())
}

/// Prompt for a yes/no answer, defaulting to no.
fn prompt_continue(message: &str) -> io::Result<bool> {
    print!("{} {} {} ", style("?").cyan(), message, style("[y/N]").dim());
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
