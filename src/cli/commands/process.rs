//! Process command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::pipeline::Pipeline;
use anyhow::Result;

/// Run the process command.
pub async fn run_process(
    input: &str,
    guidance: Option<String>,
    output: Option<String>,
    force: bool,
    mut settings: Settings,
) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Process, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'notat doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    if let Some(dir) = output {
        settings.general.notes_dir = dir;
    }

    Output::info(&format!("Processing: {}", input));

    let pipeline = Pipeline::new(settings);

    let spinner = Output::spinner("Fetching video and building note...");
    let result = pipeline.process(input, guidance.as_deref(), force).await;
    spinner.finish_and_clear();

    match result {
        Ok(result) if result.skipped => {
            Output::warning(&format!(
                "'{}' already has a note at {}. Use --force to rewrite.",
                result.title,
                result.note_path.display()
            ));
        }
        Ok(result) => {
            Output::success(&format!(
                "Wrote '{}' ({} summary)",
                result.title,
                result
                    .summary_type
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "no".to_string())
            ));
            Output::kv("note", &result.note_path.display().to_string());
        }
        Err(e) => {
            Output::error(&format!("Failed to process: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
