//! Fetch error types

use std::fmt;

/// Errors that can occur while fetching countries
///
/// The UI collapses all of these into one "no country" message, but they are
/// kept apart here so logs say what actually went wrong.
#[derive(Debug)]
pub enum FetchError {
    /// API answered 404 - no country matches the name
    NotFound,
    /// Any other non-2xx status
    Status { status: u16, message: String },
    /// Connection, DNS, TLS or timeout failure
    Network(String),
    /// Body was not the expected JSON array
    Decode(String),
    /// Base URL cannot carry a path (e.g. `mailto:`)
    InvalidUrl(String),
}

impl FetchError {
    /// Whether the API reported that nothing matched
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "No country found (404)"),
            Self::Status { status, message } => {
                write!(f, "API error ({}): {}", status, message)
            }
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Decode(msg) => write!(f, "Failed to parse response: {}", msg),
            Self::InvalidUrl(msg) => write!(f, "Invalid API URL: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}
