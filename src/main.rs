//! Notat CLI entry point.

use anyhow::Result;
use clap::Parser;
use notat::cli::{commands, Cli, Commands};
use notat::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(std::path::Path::new(path)))?,
        None => Settings::load()?,
    };

    init_logging(&cli, &settings);

    match &cli.command {
        Commands::Init => {
            commands::run_init(&settings)?;
        }

        Commands::Doctor => {
            commands::run_doctor(&settings)?;
        }

        Commands::Process {
            input,
            guidance,
            output,
            force,
        } => {
            commands::run_process(input, guidance.clone(), output.clone(), *force, settings)
                .await?;
        }

        Commands::Summarize {
            file,
            title,
            guidance,
            format,
        } => {
            commands::run_summarize(file.clone(), title, guidance.clone(), format)?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings)?;
        }
    }

    Ok(())
}

/// Wire up tracing: RUST_LOG wins, then -v flags, then the configured level.
fn init_logging(cli: &Cli, settings: &Settings) {
    let level = match cli.verbose {
        0 => settings.general.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("notat={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
