// Search module - input controller for the lookup widget
//
// Flow: keystroke -> Debouncer -> SearchController::submit -> fetcher task ->
// dispatch -> SearchView. The controller holds no output state of its own; it
// writes through the view handle it was given.

pub mod debounce;
pub mod dispatch;
pub mod view;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use dispatch::{resolve, DisplayState, Notification, NotifyLevel, DEFAULT_MAX_MATCHES};
pub use view::{SearchView, ViewUpdate};

use crate::countries::CountryFetcher;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::JoinHandle;

/// Runs lookups and routes their results to a view
///
/// Each submit takes a new generation number. A fetch that settles after a
/// newer submit is dropped instead of overwriting the newer state. Requests
/// already in flight are left to finish; only their results are ignored.
pub struct SearchController<F, V> {
    fetcher: Arc<F>,
    view: Arc<V>,
    max_matches: usize,
    generation: Arc<Mutex<u64>>,
}

impl<F: CountryFetcher, V: SearchView> SearchController<F, V> {
    pub fn new(fetcher: F, view: V, max_matches: usize) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            view: Arc::new(view),
            max_matches,
            generation: Arc::new(Mutex::new(0)),
        }
    }

    /// Handle a settled input value
    ///
    /// Whitespace-only input clears the regions and warns without touching the
    /// network. Anything else is trimmed and looked up in a spawned task whose
    /// handle is returned.
    pub fn submit(&self, raw: &str) -> Option<JoinHandle<()>> {
        let query = raw.trim();

        let generation = {
            let mut current = lock(&self.generation);
            *current += 1;

            if query.is_empty() {
                tracing::debug!("Empty query, clearing results");
                self.view.show(DisplayState::Empty);
                self.view.notify(Notification::EmptyQuery);
                return None;
            }
            *current
        };

        tracing::debug!("Looking up '{}' (generation {})", query, generation);

        let query = query.to_string();
        let fetcher = self.fetcher.clone();
        let view = self.view.clone();
        let current = self.generation.clone();
        let max_matches = self.max_matches;

        Some(tokio::spawn(async move {
            let result = fetcher.fetch_countries(&query).await;

            // Hold the lock while applying so a newer submit cannot interleave
            let latest = lock(&current);
            if *latest != generation {
                tracing::debug!(
                    "Discarding stale results for '{}' (generation {} < {})",
                    query,
                    generation,
                    *latest
                );
                return;
            }

            let outcome = resolve(&query, result, max_matches);
            view.show(outcome.state);
            if let Some(notification) = outcome.notification {
                view.notify(notification);
            }
        }))
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }
}

fn lock(generation: &Mutex<u64>) -> MutexGuard<'_, u64> {
    // A panic while holding the counter cannot leave it half-written
    generation.lock().unwrap_or_else(|e| e.into_inner())
}
