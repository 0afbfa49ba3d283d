//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;
use toml::Value;

/// Quote a string value the way TOML expects
fn quoted(s: &str) -> Value {
    Value::String(s.to_string())
}

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# country-lookup configuration

# Countries API base URL (the /name/{{name}} route is appended)
api_url = {api_url}

# Lookup behaviour
[search]
# Quiet period after the last keystroke before a lookup (ms)
debounce_ms = {debounce_ms}
# Largest result set shown as a list; more shows "too many matches"
max_matches = {max_matches}
# HTTP request timeout (seconds)
timeout_secs = {timeout_secs}
# Fields requested from the API (empty list = all fields)
fields = {fields}

# Terminal UI
[ui]
# How long a notification stays on screen (ms)
toast_ms = {toast_ms}
# Color theme: dark, light
theme = {theme}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# JSON file logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = {log_file_rotation}  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            api_url = quoted(&self.api_url),
            debounce_ms = self.search.debounce_ms,
            max_matches = self.search.max_matches,
            timeout_secs = self.search.timeout_secs,
            fields = Value::from(self.search.fields.clone()),
            toast_ms = self.ui.toast_ms,
            theme = quoted(&self.ui.theme),
            log_level = quoted(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quoted(&self.logging.file_dir.display().to_string()),
            log_file_rotation = quoted(self.logging.file_rotation.as_str()),
            log_file_prefix = quoted(&self.logging.file_prefix),
        )
    }
}
