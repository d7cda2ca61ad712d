//! Terminal output helpers.
//!
//! Keeps user-facing formatting in one place so command code reads as plain
//! control flow.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Styled output helper for CLI commands.
pub struct Output;

impl Output {
    /// Print an informational line.
    pub fn info(msg: &str) {
        println!("{} {}", style("•").cyan().bold(), msg);
    }

    /// Print a success line.
    pub fn success(msg: &str) {
        println!("{} {}", style("✓").green().bold(), msg);
    }

    /// Print a warning to stderr.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style("!").yellow().bold(), msg);
    }

    /// Print an error to stderr.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style("✗").red().bold(), msg);
    }

    /// Print a dim follow-up hint under the previous line.
    pub fn hint(msg: &str) {
        println!("    {} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a section header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print an indented key-value line.
    pub fn kv(key: &str, value: &str) {
        println!("  {} {}", style(format!("{}:", key)).dim(), value);
    }

    /// Spinner for operations without a known length.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}").unwrap());
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }
}
