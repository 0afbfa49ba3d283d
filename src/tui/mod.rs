// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, debounced lookups, timer ticks)
// - Rendering the UI
// - Receiving controller updates and applying them to the display

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod theme;
pub mod ui;

use crate::config::Config;
use crate::countries::RestCountriesClient;
use crate::logging::LogBuffer;
use crate::search::{Debouncer, NotifyLevel, SearchController, ViewUpdate};
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use input::InputAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

type Controller = SearchController<RestCountriesClient, mpsc::UnboundedSender<ViewUpdate>>;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even if the loop failed.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    let client = RestCountriesClient::new(
        &config.api_url,
        &config.search.fields,
        config.search.timeout(),
    )
    .context("Invalid api_url in config")?;

    let (view_tx, view_rx) = mpsc::unbounded_channel();
    let controller = SearchController::new(client, view_tx, config.search.max_matches);
    let (debouncer, settled_rx) = Debouncer::new(config.search.debounce());

    tracing::info!(
        "Searching {} (debounce {}ms)",
        config.api_url,
        debouncer.delay().as_millis()
    );

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, log_buffer);
    let mut channels = Channels {
        debouncer,
        settled_rx,
        view_rx,
    };

    let result = run_event_loop(&mut terminal, &mut app, &controller, &mut channels).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Everything the loop reads from or feeds besides the app itself
struct Channels {
    debouncer: Debouncer<String>,
    settled_rx: mpsc::UnboundedReceiver<String>,
    view_rx: mpsc::UnboundedReceiver<ViewUpdate>,
}

/// Main event loop
///
/// Waits on four sources at once:
/// 1. Keyboard input (edits the search box, feeds the debouncer)
/// 2. Settled values from the debouncer (start a lookup)
/// 3. Controller updates (replace regions, pop toasts)
/// 4. Timer ticks (expire toasts, redraw the status line)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    controller: &Controller,
    channels: &mut Channels,
) -> Result<()> {
    let Channels {
        debouncer,
        settled_rx,
        view_rx,
    } = channels;
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, debouncer, key_event);
                    }
                }
            } => {}

            Some(value) = settled_rx.recv() => {
                // The handle is not awaited; results come back over view_rx
                let _ = controller.submit(&value);
            }

            Some(update) = view_rx.recv() => {
                app.apply(update);
            }

            _ = tick_interval.tick() => {
                app.clear_expired_toast();
            }
        }

        if app.should_quit {
            break;
        }
    }

    debouncer.cancel();
    Ok(())
}

/// Handle keyboard input
///
/// Any change to the search box text is an input event and restarts the
/// debounce timer with the new value.
fn handle_key_event(app: &mut App, debouncer: &mut Debouncer<String>, key_event: KeyEvent) {
    let changed = match input::map_key(key_event) {
        InputAction::Insert(c) => {
            app.insert_char(c);
            true
        }
        InputAction::Backspace => app.backspace(),
        InputAction::ClearLine => app.clear_query(),
        InputAction::CopyMarkup => {
            copy_region_markup(app);
            false
        }
        InputAction::Quit => {
            app.should_quit = true;
            false
        }
        InputAction::Ignore => false,
    };

    if changed {
        debouncer.push(app.query.clone());
    }
}

fn copy_region_markup(app: &mut App) {
    let Some(html) = app.region_markup() else {
        app.show_toast("Nothing to copy", NotifyLevel::Warning);
        return;
    };

    match clipboard::copy_markup(&html) {
        Ok(()) => app.show_toast("✓ Copied HTML to clipboard", NotifyLevel::Info),
        Err(e) => {
            tracing::warn!("Clipboard copy failed: {:#}", e);
            app.show_toast("✗ Failed to copy", NotifyLevel::Failure);
        }
    }
}
