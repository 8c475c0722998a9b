//! Shared `reqwest` client construction for the catalog and slide fetchers.

use std::time::Duration;

use reqwest::Client;

use crate::error::CatalogError;

/// Upper bound on establishing a connection, independent of the overall
/// request timeout.
const CONNECT_TIMEOUT_SECS: u64 = 3;

/// Builds an HTTP client whose every request is bounded by `timeout_secs`.
///
/// # Errors
///
/// Returns [`CatalogError::Configuration`] if the underlying `reqwest::Client`
/// cannot be constructed (e.g., invalid TLS config).
pub(crate) fn build_http_client(timeout_secs: u64, user_agent: &str) -> Result<Client, CatalogError> {
    let timeout = Duration::from_secs(timeout_secs.max(1));
    Client::builder()
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout))
        .user_agent(user_agent)
        .build()
        .map_err(|e| CatalogError::configuration(format!("could not build HTTP client: {e}")))
}

/// Parses an operator-supplied base URL, accepting only `http` and `https`.
pub(crate) fn parse_http_url(raw: &str) -> Result<reqwest::Url, String> {
    let url = reqwest::Url::parse(raw.trim()).map_err(|e| format!("'{raw}' is not a valid URL: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("'{raw}' uses unsupported scheme '{other}'")),
    }
}
