// TUI application state
//
// Holds the search box contents, the current display state (which both output
// regions are derived from) and the active toast. The search controller never
// touches this struct directly; its updates arrive as `ViewUpdate`s and are
// applied here on the UI task.

use super::components::Toast;
use super::theme::{Theme, ThemeKind};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::markup::{country_info_markup, country_list_markup};
use crate::search::{DisplayState, NotifyLevel, ViewUpdate};
use std::time::Duration;

/// Main application state for the TUI
pub struct App {
    /// Current search box contents
    pub query: String,

    /// What the list and info regions show
    pub display: DisplayState,

    /// Active notification, if any
    pub toast: Option<Toast>,

    /// How long new toasts stay up
    toast_duration: Duration,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Log buffer for the status line
    pub log_buffer: LogBuffer,

    /// Current color theme
    pub theme: Theme,

    /// Number of lookups applied since start (for the status line)
    pub results_shown: u64,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        Self {
            query: String::new(),
            display: DisplayState::Empty,
            toast: None,
            toast_duration: config.ui.toast_duration(),
            should_quit: false,
            log_buffer,
            theme: ThemeKind::parse(&config.ui.theme).theme(),
            results_shown: 0,
        }
    }

    /// Apply an update from the search controller
    pub fn apply(&mut self, update: ViewUpdate) {
        match update {
            // Replacing the state clears both regions before the new content
            // lands, so stale rows never survive into the next render
            ViewUpdate::Show(state) => {
                self.display = state;
                self.results_shown += 1;
            }
            ViewUpdate::Notify(notification) => {
                self.toast = Some(Toast::new(notification, self.toast_duration));
            }
        }
    }

    /// Append a character to the search box
    pub fn insert_char(&mut self, c: char) {
        self.query.push(c);
    }

    /// Remove the last character; returns whether anything changed
    pub fn backspace(&mut self) -> bool {
        self.query.pop().is_some()
    }

    /// Empty the search box; returns whether anything changed
    pub fn clear_query(&mut self) -> bool {
        if self.query.is_empty() {
            return false;
        }
        self.query.clear();
        true
    }

    /// Show a free-form toast
    pub fn show_toast(&mut self, message: impl Into<String>, level: NotifyLevel) {
        self.toast = Some(Toast::message(message, level, self.toast_duration));
    }

    /// Drop the toast once its time is up
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// HTML for whichever region is currently filled
    pub fn region_markup(&self) -> Option<String> {
        match &self.display {
            DisplayState::List(countries) => Some(country_list_markup(countries)),
            DisplayState::Card(country) => Some(country_info_markup(country)),
            DisplayState::Empty | DisplayState::Error => None,
        }
    }
}
