//! CLI module for Notat.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Notat - YouTube videos into Obsidian notes
///
/// A local-first CLI tool that turns YouTube videos into markdown notes with
/// heuristic transcript summaries. The name "Notat" comes from the Norwegian
/// word for "note."
#[derive(Parser, Debug)]
#[command(name = "notat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Notat and verify system requirements
    Init,

    /// Check system requirements and configuration
    Doctor,

    /// Fetch a video, summarize its transcript, and write a note
    Process {
        /// YouTube URL or video ID
        input: String,

        /// Free-form guidance for the summary (e.g. "brief overview")
        #[arg(short, long)]
        guidance: Option<String>,

        /// Write the note to this directory instead of the configured one
        #[arg(short, long)]
        output: Option<String>,

        /// Overwrite an existing note for this video
        #[arg(short, long)]
        force: bool,
    },

    /// Summarize a transcript from a file or stdin
    Summarize {
        /// Transcript file to read (stdin if not specified)
        #[arg(short = 'i', long)]
        file: Option<String>,

        /// Video title for the summary
        #[arg(short, long)]
        title: String,

        /// Free-form guidance for the summary
        #[arg(short, long)]
        guidance: Option<String>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the active configuration as TOML
    Show,

    /// Set a configuration value and save it
    Set {
        /// Dotted key, e.g. "general.notes_dir" or "youtube.api_key"
        key: String,
        /// New value (comma-separated for list keys)
        value: String,
    },

    /// Open the configuration file in $EDITOR
    Edit,

    /// Print the configuration file path
    Path,
}
