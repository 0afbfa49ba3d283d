//! Configuration tests
//!
//! The default template must parse back into the same values, and every
//! layer of the env > file > defaults chain must be reachable.

use super::search::DEFAULT_FIELDS;
use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that the serialized default config parses back to the defaults
#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();

    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let config = Config::from_sources(parsed.unwrap(), no_env);
    let defaults = Config::default();
    assert_eq!(config.api_url, defaults.api_url);
    assert_eq!(config.search.debounce_ms, 300);
    assert_eq!(config.search.max_matches, 10);
    assert_eq!(config.search.fields, defaults.search.fields);
    assert_eq!(config.ui.toast_ms, 3000);
    assert_eq!(config.ui.theme, "dark");
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config::default();
    config.api_url = "http://localhost:9000/v3.1".to_string();
    config.search.debounce_ms = 150;
    config.search.fields = vec!["name".to_string(), "flags".to_string()];
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;
    config.ui.theme = "light".to_string();

    let parsed = Config::parse_file_config(&config.to_toml()).unwrap();
    let loaded = Config::from_sources(parsed, no_env);

    assert_eq!(loaded.api_url, "http://localhost:9000/v3.1");
    assert_eq!(loaded.search.debounce_ms, 150);
    assert_eq!(loaded.search.fields, vec!["name", "flags"]);
    assert!(loaded.logging.file_enabled);
    assert_eq!(loaded.logging.file_rotation, LogRotation::Hourly);
    assert_eq!(loaded.ui.theme, "light");
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let config = Config::from_sources(FileConfig::default(), no_env);
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.search.debounce(), std::time::Duration::from_millis(300));
    assert_eq!(config.search.fields, DEFAULT_FIELDS);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = Config::parse_file_config(
        r#"
[search]
max_matches = 5
"#,
    )
    .unwrap();
    let config = Config::from_sources(file, no_env);

    assert_eq!(config.search.max_matches, 5);
    assert_eq!(config.search.debounce_ms, 300);
    assert_eq!(config.api_url, DEFAULT_API_URL);
}

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file_config(
        r#"
api_url = "http://file.example/v3.1"

[search]
debounce_ms = 500

[logging]
level = "warn"
"#,
    )
    .unwrap();
    let env = env_from(&[
        ("COUNTRY_LOOKUP_API_URL", "http://env.example/v3.1"),
        ("COUNTRY_LOOKUP_DEBOUNCE_MS", "120"),
        ("COUNTRY_LOOKUP_LOG_LEVEL", "debug"),
    ]);
    let config = Config::from_sources(file, env);

    assert_eq!(config.api_url, "http://env.example/v3.1");
    assert_eq!(config.search.debounce_ms, 120);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_unparseable_env_debounce_is_ignored() {
    let env = env_from(&[("COUNTRY_LOOKUP_DEBOUNCE_MS", "soon")]);
    let config = Config::from_sources(FileConfig::default(), env);
    assert_eq!(config.search.debounce_ms, 300);
}

#[test]
fn test_max_matches_below_two_falls_back() {
    let file = Config::parse_file_config("[search]\nmax_matches = 1\n").unwrap();
    let config = Config::from_sources(file, no_env);
    assert_eq!(config.search.max_matches, 10);
}

#[test]
fn test_invalid_file_is_an_error() {
    assert!(Config::parse_file_config("api_url = https://no-quotes").is_err());
    assert!(Config::parse_file_config("[search]\ndebounce_ms = \"fast\"").is_err());
}

#[test]
fn test_logging_section_partial_and_rotation_names() {
    let file = Config::parse_file_config(
        r#"
[logging]
file_enabled = true
file_rotation = "never"
"#,
    )
    .unwrap();
    let config = Config::from_sources(file, no_env);
    assert!(config.logging.file_enabled);
    assert_eq!(config.logging.file_rotation, LogRotation::Never);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file_prefix, "country-lookup");
}

#[test]
fn test_unknown_rotation_is_an_error() {
    assert!(Config::parse_file_config("[logging]\nfile_rotation = \"weekly\"\n").is_err());
}

#[test]
fn test_template_escapes_string_values() {
    let mut config = Config::default();
    config.api_url = r#"http://localhost/"quoted"\v3.1"#.to_string();
    config.logging.file_prefix = r"lookup\run".to_string();

    let parsed = Config::parse_file_config(&config.to_toml()).unwrap();
    let loaded = Config::from_sources(parsed, no_env);

    assert_eq!(loaded.api_url, config.api_url);
    assert_eq!(loaded.logging.file_prefix, r"lookup\run");
}
