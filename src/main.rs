//! Media Renamer CLI
//!
//! A command-line tool for renaming video and caption files using
//! season/episode detection and TMDB metadata.

use clap::Parser;
use colored::Colorize;
use media_renamer::cli::args::Cli;
use media_renamer::core::applier::{Confirm, StdinConfirm};
use media_renamer::core::orchestrator::{collect_input_files, collect_list_files, Orchestrator};
use media_renamer::services::tmdb::TmdbClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();
    cli.validate()?;

    // Initialize logging
    init_logging(cli.verbose);

    // Enumerate candidate files; the clap group guarantees exactly one source
    let files = match (&cli.input, &cli.list) {
        (Some(input), None) => collect_input_files(input)?,
        (None, Some(list)) => collect_list_files(list)?,
        _ => unreachable!("clap enforces exactly one of --input/--list"),
    };

    // Configuration failures are fatal before any file is processed
    let provider = TmdbClient::from_env()?;

    let mut orchestrator = Orchestrator::new(cli.run_config(), provider);

    let mut stdin_confirm = StdinConfirm;
    let confirmer: Option<&mut dyn Confirm> = if cli.interactive {
        Some(&mut stdin_confirm)
    } else {
        None
    };

    let summary = orchestrator.run(files, confirmer).await?;

    println!(
        "{} applied, {} skipped, {} failed",
        summary.applied.to_string().green().bold(),
        summary.skipped,
        if summary.failed > 0 {
            summary.failed.to_string().red().bold()
        } else {
            summary.failed.to_string().normal()
        }
    );

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("media_renamer=debug")
    } else {
        EnvFilter::new("media_renamer=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
