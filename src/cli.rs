// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - tui (default): interactive search widget
// - search <name>: run one lookup and print the region markup
// - config --show|--path|--reset: inspect or regenerate the config file

use crate::config::{Config, VERSION};
use crate::countries::RestCountriesClient;
use crate::markup::{country_info_markup, country_list_markup};
use crate::search::{DisplayState, Notification, SearchController, ViewUpdate};
use crate::tui::components::formatters::format_number;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::process::ExitCode;
use tokio::sync::mpsc;

/// Country Lookup - search countries by name from the terminal
#[derive(Parser)]
#[command(name = "country-lookup")]
#[command(version = VERSION)]
#[command(about = "Search countries by name from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive search (default)
    Tui,

    /// Look up a single name and print the result
    Search {
        /// Country name or part of one
        name: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The HTML fragments for the list and info regions
    Html,
    /// Plain text
    Text,
}

// ─────────────────────────────────────────────────────────────────────────────
// search
// ─────────────────────────────────────────────────────────────────────────────

/// Run one lookup through the same controller the TUI uses
///
/// Notifications go to stderr so stdout holds only the rendered regions.
/// Exits with failure unless a list or a card was shown.
pub async fn handle_search(config: &Config, name: &str, format: OutputFormat) -> Result<ExitCode> {
    let client = RestCountriesClient::new(
        &config.api_url,
        &config.search.fields,
        config.search.timeout(),
    )
    .context("Invalid api_url in config")?;

    let (view_tx, mut view_rx) = mpsc::unbounded_channel();
    let controller = SearchController::new(client, view_tx, config.search.max_matches);

    if let Some(handle) = controller.submit(name) {
        handle.await.context("Lookup task failed")?;
    }
    // Closes the channel so the drain below terminates
    drop(controller);

    let mut state = DisplayState::Empty;
    let mut notification = None;
    while let Some(update) = view_rx.recv().await {
        match update {
            ViewUpdate::Show(s) => state = s,
            ViewUpdate::Notify(n) => notification = Some(n),
        }
    }

    if let Some(n) = notification {
        eprintln!("{}", notification_line(n));
    }

    let output = render(&state, format);
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(match state {
        DisplayState::List(_) | DisplayState::Card(_) => ExitCode::SUCCESS,
        DisplayState::Empty | DisplayState::Error => ExitCode::FAILURE,
    })
}

fn notification_line(notification: Notification) -> String {
    format!(
        "[{}] {}",
        notification.level().as_str(),
        notification.message()
    )
}

/// Render both regions of a display state
fn render(state: &DisplayState, format: OutputFormat) -> String {
    match format {
        OutputFormat::Html => {
            let mut regions = Vec::new();
            let list = state.list_region();
            if !list.is_empty() {
                regions.push(country_list_markup(list));
            }
            if let Some(country) = state.info_region() {
                regions.push(country_info_markup(country));
            }
            regions.join("\n")
        }
        OutputFormat::Text => {
            let mut lines: Vec<String> = state
                .list_region()
                .iter()
                .map(|c| format!("{} {}", c.flag, c.display_name()).trim().to_string())
                .collect();
            if let Some(country) = state.info_region() {
                lines.push(format!("{} {}", country.flag, country.display_name()).trim().to_string());
                lines.push(format!("Capital: {}", country.capitals()));
                lines.push(format!("Population: {}", format_number(country.population)));
                lines.push(format!("Languages: {}", country.language_names()));
            }
            lines.join("\n")
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// config
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_config(show: bool, path: bool, reset: bool) -> Result<ExitCode> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show()
    } else if reset {
        handle_config_reset()
    } else {
        // No flag provided, show help
        println!("Usage: country-lookup config [--show|--path|--reset]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --path    Show config file path");
        println!("  --reset   Reset config file to defaults");
        Ok(ExitCode::SUCCESS)
    }
}

fn handle_config_path() -> Result<ExitCode> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(ExitCode::SUCCESS)
}

fn handle_config_show() -> Result<ExitCode> {
    let config = Config::from_env()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_config_reset() -> Result<ExitCode> {
    let path = Config::config_path().context("Could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(ExitCode::SUCCESS);
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }

    // Write the default config (using Config's single source of truth)
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::models::{CountryName, Flags};
    use crate::countries::Country;

    fn country(common: &str, flag: &str) -> Country {
        Country {
            name: CountryName {
                common: common.to_string(),
                official: String::new(),
            },
            capital: vec!["Lima".to_string()],
            population: 33_715_471,
            flags: Flags {
                svg: format!("https://flagcdn.com/{}.svg", common.to_lowercase()),
                png: String::new(),
                alt: None,
            },
            flag: flag.to_string(),
            languages: [("spa".to_string(), "Spanish".to_string())].into(),
        }
    }

    #[test]
    fn test_cli_parses_search() {
        let cli = Cli::try_parse_from(["country-lookup", "search", "peru", "--format", "text"])
            .unwrap();
        match cli.command {
            Some(Commands::Search { name, format }) => {
                assert_eq!(name, "peru");
                assert_eq!(format, OutputFormat::Text);
            }
            _ => panic!("expected search command"),
        }

        let cli = Cli::try_parse_from(["country-lookup", "search", "chile"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Search {
                format: OutputFormat::Html,
                ..
            })
        ));
    }

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["country-lookup"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_render_text_card() {
        let state = DisplayState::Card(Box::new(country("Peru", "🇵🇪")));
        assert_eq!(
            render(&state, OutputFormat::Text),
            "🇵🇪 Peru\nCapital: Lima\nPopulation: 33,715,471\nLanguages: Spanish"
        );
    }

    #[test]
    fn test_render_html_list_only() {
        let state = DisplayState::List(vec![country("Peru", ""), country("Chile", "")]);
        let html = render(&state, OutputFormat::Html);
        assert_eq!(html.matches("<li").count(), 2);
        assert!(!html.contains("Capital:"));
    }

    #[test]
    fn test_render_error_is_blank() {
        assert_eq!(render(&DisplayState::Error, OutputFormat::Html), "");
        assert_eq!(render(&DisplayState::Empty, OutputFormat::Text), "");
    }

    #[test]
    fn test_notification_line() {
        assert_eq!(
            notification_line(Notification::NoMatch),
            "[failure] Oops, there is no country with that name"
        );
    }
}
