// Data models for the REST Countries API
//
// These structs map to the v3.1 country object. We only request and parse
// the fields the widget renders (name, capital, population, flags, flag,
// languages).
// Serde ignores anything extra, so the structs stay valid if the API grows.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single country record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,

    // Some territories have no capital, others have several
    #[serde(default)]
    pub capital: Vec<String>,

    #[serde(default)]
    pub population: u64,

    #[serde(default)]
    pub flags: Flags,

    /// Flag emoji, used where images cannot be shown
    #[serde(default)]
    pub flag: String,

    /// ISO 639-3 code -> language name
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
}

/// Country name in its common and official forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// Flag image references
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub alt: Option<String>,
}

impl Country {
    /// Name shown in the list and card (official name, falling back to common)
    pub fn display_name(&self) -> &str {
        if self.name.official.is_empty() {
            &self.name.common
        } else {
            &self.name.official
        }
    }

    /// Flag image URL, preferring the SVG variant
    pub fn flag_url(&self) -> &str {
        if self.flags.svg.is_empty() {
            &self.flags.png
        } else {
            &self.flags.svg
        }
    }

    /// Alt text for the flag image
    pub fn flag_alt(&self) -> String {
        match &self.flags.alt {
            Some(alt) if !alt.is_empty() => alt.clone(),
            _ => format!("Flag of {}", self.name.common),
        }
    }

    /// All capitals joined for display
    pub fn capitals(&self) -> String {
        self.capital.join(", ")
    }

    /// All spoken languages joined for display
    pub fn language_names(&self) -> String {
        self.languages
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let json = r#"{
            "name": {
                "common": "Switzerland",
                "official": "Swiss Confederation",
                "nativeName": {}
            },
            "capital": ["Bern"],
            "flag": "🇨🇭",
            "population": 8654622,
            "flags": {
                "png": "https://flagcdn.com/w320/ch.png",
                "svg": "https://flagcdn.com/ch.svg",
                "alt": "The flag of Switzerland is square shaped."
            },
            "languages": {
                "fra": "French",
                "gsw": "Swiss German",
                "ita": "Italian",
                "roh": "Romansh"
            }
        }"#;

        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.display_name(), "Swiss Confederation");
        assert_eq!(country.flag_url(), "https://flagcdn.com/ch.svg");
        assert_eq!(country.capitals(), "Bern");
        assert_eq!(country.flag, "🇨🇭");
        assert_eq!(country.population, 8_654_622);
        assert_eq!(
            country.language_names(),
            "French, Swiss German, Italian, Romansh"
        );
    }

    #[test]
    fn test_parse_sparse_record() {
        // Antarctica-style record: no capital, no languages, no alt text
        let json = r#"{
            "name": {"common": "Antarctica"},
            "flags": {"png": "https://flagcdn.com/w320/aq.png"}
        }"#;

        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.display_name(), "Antarctica");
        assert_eq!(country.flag_url(), "https://flagcdn.com/w320/aq.png");
        assert_eq!(country.flag_alt(), "Flag of Antarctica");
        assert_eq!(country.capitals(), "");
        assert_eq!(country.language_names(), "");
        assert_eq!(country.population, 0);
    }
}
