// Country Lookup - search countries by name from the terminal
//
// Type part of a country name; after a short pause the REST Countries API is
// queried and the matches are shown either as a compact list (2-10 matches)
// or as a detailed card (exactly one match).
//
// Architecture:
// - Countries: HTTP client and serde models for the REST Countries API
// - Search: debouncer, controller and display dispatcher
// - Markup: HTML fragments for the list and info regions
// - TUI (ratatui): search box, regions, toasts
// - Event flow: mpsc channels connect the debouncer, controller and UI

mod cli;
mod config;
mod countries;
mod logging;
mod markup;
mod search;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use logging::LogBuffer;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Tui);

    // Config subcommands run before any logging or network setup
    if let Commands::Config { show, path, reset } = command {
        return cli::handle_config(show, path, reset);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env()?;

    match command {
        Commands::Search { name, format } => {
            // The guard must stay alive until exit so file logs flush
            let _file_guard = logging::init(&config.logging, None)?;
            cli::handle_search(&config, &name, format).await
        }
        _ => {
            // Capture logs into a buffer so they don't garble the display
            let log_buffer = LogBuffer::new();
            let _file_guard = logging::init(&config.logging, Some(log_buffer.clone()))?;

            tracing::info!("Starting TUI");
            tui::run_tui(config, log_buffer).await?;
            tracing::info!("Shutdown complete");
            Ok(ExitCode::SUCCESS)
        }
    }
}
