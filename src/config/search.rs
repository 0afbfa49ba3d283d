//! Search and UI configuration

use crate::search::{DEFAULT_DEBOUNCE, DEFAULT_MAX_MATCHES};
use serde::Deserialize;
use std::time::Duration;

/// Fields requested from the API - exactly what the widget renders
pub const DEFAULT_FIELDS: &[&str] = &[
    "name",
    "capital",
    "population",
    "flags",
    "flag",
    "languages",
];

// ─────────────────────────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────────────────────────

/// Lookup behaviour
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a lookup (ms)
    pub debounce_ms: u64,
    /// Largest result set shown as a list; more triggers "too many matches"
    pub max_matches: usize,
    /// HTTP request timeout (seconds)
    pub timeout_secs: u64,
    /// Fields requested via the `fields` query parameter (empty = all)
    pub fields: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            max_matches: DEFAULT_MAX_MATCHES,
            timeout_secs: 10,
            fields: DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Search settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileSearch {
    pub debounce_ms: Option<u64>,
    pub max_matches: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub fields: Option<Vec<String>>,
}

impl SearchConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileSearch>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            debounce_ms: file.debounce_ms.unwrap_or(defaults.debounce_ms),
            // Below 2 the list view could never appear
            max_matches: file
                .max_matches
                .filter(|&n| n >= 2)
                .unwrap_or(defaults.max_matches),
            timeout_secs: file.timeout_secs.unwrap_or(defaults.timeout_secs),
            fields: file.fields.unwrap_or(defaults.fields),
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// UI
// ─────────────────────────────────────────────────────────────────────────────

/// Terminal UI settings
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// How long a notification toast stays up (ms)
    pub toast_ms: u64,
    /// Color theme: "dark" or "light"
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_ms: 3000,
            theme: "dark".to_string(),
        }
    }
}

/// UI settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileUi {
    pub toast_ms: Option<u64>,
    pub theme: Option<String>,
}

impl UiConfig {
    pub fn from_file(file: Option<FileUi>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            toast_ms: file.toast_ms.unwrap_or(defaults.toast_ms),
            theme: file.theme.unwrap_or(defaults.theme),
        }
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}
