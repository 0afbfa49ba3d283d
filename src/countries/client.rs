//! REST Countries HTTP client
//!
//! One GET per lookup: `{api_url}/name/{name}?fields=...`. No retry and no
//! cancellation; the reqwest client's own timeout is the only deadline.

use super::{Country, CountryFetcher, FetchError};
use reqwest::{StatusCode, Url};
use std::time::Duration;

/// Fetcher backed by the public REST Countries API
#[derive(Clone)]
pub struct RestCountriesClient {
    client: reqwest::Client,
    base_url: Url,
    fields: Vec<String>,
}

impl RestCountriesClient {
    /// Create a client for `api_url` (e.g. `https://restcountries.com/v3.1`)
    ///
    /// # Errors
    /// Returns an error if the URL does not parse or the HTTP client cannot be built
    pub fn new(api_url: &str, fields: &[String], timeout: Duration) -> Result<Self, FetchError> {
        let base_url =
            Url::parse(api_url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", api_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(api_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to create HTTP client: {}", e)))?;

        tracing::debug!(
            "Initialized countries client: {} (fields: {})",
            base_url,
            fields.join(",")
        );

        Ok(Self {
            client,
            base_url,
            fields: fields.to_vec(),
        })
    }

    /// Build the lookup URL for a partial name
    ///
    /// The name is pushed as a single path segment, so spaces and slashes are
    /// percent-encoded instead of changing the route. `.` and `..` cannot be
    /// carried as a segment at all (URL normalization drops them, even as
    /// `%2E`), and no country is named that, so they are a miss up front.
    pub fn endpoint(&self, name: &str) -> Result<Url, FetchError> {
        if name == "." || name == ".." {
            return Err(FetchError::NotFound);
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("name")
            .push(name);

        if !self.fields.is_empty() {
            url.query_pairs_mut()
                .append_pair("fields", &self.fields.join(","));
        }
        Ok(url)
    }
}

impl CountryFetcher for RestCountriesClient {
    async fn fetch_countries(&self, name: &str) -> Result<Vec<Country>, FetchError> {
        let url = self.endpoint(name)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let countries: Vec<Country> = response.json().await?;
        tracing::debug!("'{}' matched {} countries", name, countries.len());
        Ok(countries)
    }
}
