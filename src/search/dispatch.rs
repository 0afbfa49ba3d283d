//! Display dispatcher - maps a settled lookup to a display state
//!
//! Four terminal states: Empty, List, Card, Error. Exactly one is visible at
//! a time; both output regions are derived from the current state.

use crate::countries::{Country, FetchError};

/// Default upper bound for the list view
pub const DEFAULT_MAX_MATCHES: usize = 10;

/// What the two output regions show
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayState {
    /// Both regions cleared
    #[default]
    Empty,
    /// List region shows flag + name per match; info region cleared
    List(Vec<Country>),
    /// Info region shows the detailed card; list region cleared
    Card(Box<Country>),
    /// Lookup failed; both regions cleared
    Error,
}

impl DisplayState {
    /// Countries rendered in the list region
    pub fn list_region(&self) -> &[Country] {
        match self {
            Self::List(countries) => countries,
            _ => &[],
        }
    }

    /// Country rendered in the info region
    pub fn info_region(&self) -> Option<&Country> {
        match self {
            Self::Card(country) => Some(country),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::List(_) => "list",
            Self::Card(_) => "card",
            Self::Error => "error",
        }
    }
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Warning,
    Info,
    Failure,
}

impl NotifyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Failure => "failure",
        }
    }
}

/// User-facing notifications. Success has no toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Search box is empty after trimming
    EmptyQuery,
    /// More matches than the list view holds
    TooManyMatches,
    /// 404, empty result, or any other fetch failure
    NoMatch,
}

impl Notification {
    pub fn level(&self) -> NotifyLevel {
        match self {
            Self::EmptyQuery => NotifyLevel::Warning,
            Self::TooManyMatches => NotifyLevel::Info,
            Self::NoMatch => NotifyLevel::Failure,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::EmptyQuery => "Please enter any data!",
            Self::TooManyMatches => "Too many matches found. Please enter a more specific name.",
            Self::NoMatch => "Oops, there is no country with that name",
        }
    }
}

/// Result of dispatching one lookup
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub state: DisplayState,
    pub notification: Option<Notification>,
}

impl Outcome {
    fn quiet(state: DisplayState) -> Self {
        Self {
            state,
            notification: None,
        }
    }

    fn with(state: DisplayState, notification: Notification) -> Self {
        Self {
            state,
            notification: Some(notification),
        }
    }
}

/// Choose the display state for a successful result set
///
/// An empty array is reported as "no match" rather than rendering a card
/// without data.
pub fn dispatch(mut countries: Vec<Country>, max_matches: usize) -> Outcome {
    match countries.len() {
        0 => Outcome::with(DisplayState::Error, Notification::NoMatch),
        1 => match countries.pop() {
            Some(country) => Outcome::quiet(DisplayState::Card(Box::new(country))),
            None => Outcome::with(DisplayState::Error, Notification::NoMatch),
        },
        n if n > max_matches => {
            Outcome::with(DisplayState::Empty, Notification::TooManyMatches)
        }
        _ => Outcome::quiet(DisplayState::List(countries)),
    }
}

/// Choose the display state for a settled fetch
///
/// Every error, not only 404, becomes the same "no match" failure.
pub fn resolve(
    query: &str,
    result: Result<Vec<Country>, FetchError>,
    max_matches: usize,
) -> Outcome {
    match result {
        Ok(countries) => {
            let count = countries.len();
            let outcome = dispatch(countries, max_matches);
            tracing::info!(
                "'{}': {} match(es) -> {}",
                query,
                count,
                outcome.state.name()
            );
            outcome
        }
        Err(e) => {
            if e.is_not_found() {
                tracing::info!("'{}': {}", query, e);
            } else {
                tracing::warn!("Lookup for '{}' failed: {}", query, e);
            }
            Outcome::with(DisplayState::Error, Notification::NoMatch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::models::{CountryName, Flags};

    fn countries(n: usize) -> Vec<Country> {
        (0..n)
            .map(|i| Country {
                name: CountryName {
                    common: format!("Country {}", i),
                    official: String::new(),
                },
                capital: vec![format!("Capital {}", i)],
                population: 1_000 * i as u64,
                flags: Flags::default(),
                flag: String::new(),
                languages: Default::default(),
            })
            .collect()
    }

    #[test]
    fn test_too_many_matches_clears_and_informs() {
        for n in [11, 12, 50, 250] {
            let outcome = dispatch(countries(n), DEFAULT_MAX_MATCHES);
            assert_eq!(outcome.state, DisplayState::Empty);
            assert_eq!(outcome.notification, Some(Notification::TooManyMatches));
            assert!(outcome.state.list_region().is_empty());
            assert!(outcome.state.info_region().is_none());
        }
    }

    #[test]
    fn test_two_to_ten_renders_list() {
        for n in 2..=10 {
            let outcome = dispatch(countries(n), DEFAULT_MAX_MATCHES);
            assert_eq!(outcome.notification, None);
            assert_eq!(outcome.state.list_region().len(), n);
            assert!(outcome.state.info_region().is_none());
        }
    }

    #[test]
    fn test_single_match_renders_card() {
        let outcome = dispatch(countries(1), DEFAULT_MAX_MATCHES);
        assert_eq!(outcome.notification, None);
        assert!(outcome.state.list_region().is_empty());
        let card = outcome.state.info_region().unwrap();
        assert_eq!(card.name.common, "Country 0");
    }

    #[test]
    fn test_zero_matches_is_no_match() {
        let outcome = dispatch(Vec::new(), DEFAULT_MAX_MATCHES);
        assert_eq!(outcome.state, DisplayState::Error);
        assert_eq!(outcome.notification, Some(Notification::NoMatch));
    }

    #[test]
    fn test_custom_max_matches() {
        let outcome = dispatch(countries(4), 3);
        assert_eq!(outcome.notification, Some(Notification::TooManyMatches));

        let outcome = dispatch(countries(3), 3);
        assert_eq!(outcome.state.list_region().len(), 3);
    }

    #[test]
    fn test_any_error_is_no_match() {
        let errors = [
            FetchError::NotFound,
            FetchError::Status {
                status: 503,
                message: "unavailable".to_string(),
            },
            FetchError::Network("connection refused".to_string()),
            FetchError::Decode("expected array".to_string()),
        ];
        for e in errors {
            let outcome = resolve("x", Err(e), DEFAULT_MAX_MATCHES);
            assert_eq!(outcome.state, DisplayState::Error);
            assert_eq!(outcome.notification, Some(Notification::NoMatch));
        }
    }

    #[test]
    fn test_notification_levels() {
        assert_eq!(Notification::EmptyQuery.level(), NotifyLevel::Warning);
        assert_eq!(Notification::TooManyMatches.level(), NotifyLevel::Info);
        assert_eq!(Notification::NoMatch.level(), NotifyLevel::Failure);
        assert_eq!(
            Notification::NoMatch.message(),
            "Oops, there is no country with that name"
        );
    }
}
