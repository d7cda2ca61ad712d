//! Summarize command implementation.
//!
//! Runs the extractive summarizer over a local transcript, for use without
//! touching YouTube at all (or for integration with other systems via JSON).

use crate::cli::Output;
use crate::summarize::summarize;
use anyhow::Result;
use std::io::Read;
use std::str::FromStr;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummarizeFormat {
    Text,
    Json,
}

impl FromStr for SummarizeFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(SummarizeFormat::Text),
            "json" => Ok(SummarizeFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json.", s)),
        }
    }
}

/// Run the summarize command.
pub fn run_summarize(
    file: Option<String>,
    title: &str,
    guidance: Option<String>,
    format: &str,
) -> Result<()> {
    let format: SummarizeFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let transcript = match file {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Could not read {}: {}", path, e))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let result = summarize(&transcript, title, guidance.as_deref());

    match format {
        SummarizeFormat::Json => {
            println!("{}", serde_json::to_string(&result)?);
        }
        SummarizeFormat::Text => {
            if result.is_unavailable() {
                Output::warning(&result.summary);
            } else {
                println!("{}", result.summary);
            }
        }
    }

    Ok(())
}
