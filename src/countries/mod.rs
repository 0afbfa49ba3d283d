// Countries module - data fetcher for the lookup widget
//
// The fetcher is a trait so the search controller can be driven by the real
// HTTP client in production and by scripted fetchers in tests.

mod client;
mod error;
pub mod models;

pub use client::RestCountriesClient;
pub use error::FetchError;
pub use models::Country;

use std::future::Future;

/// Source of country records for a partial name
pub trait CountryFetcher: Send + Sync + 'static {
    /// Look up countries whose name contains `name`
    ///
    /// Issues exactly one request per call. Any non-2xx response comes back as
    /// an error; a 404 maps to `FetchError::NotFound`.
    fn fetch_countries(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Country>, FetchError>> + Send;
}
