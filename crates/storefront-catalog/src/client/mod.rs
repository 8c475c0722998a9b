//! HTTP client for the WooCommerce REST catalog.

mod categories;
mod endpoint;

use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use storefront_core::{AppConfig, CatalogSettings, Product};

use crate::error::CatalogError;
use crate::http::build_http_client;
use crate::normalize::normalize_product;
use crate::types::{decode_entries, WooErrorBody, WooProduct};

pub use endpoint::MAX_PER_PAGE;

/// Page size used when a filter does not name one.
pub const DEFAULT_PER_PAGE: u32 = 8;

/// Publish state that storefront pages request.
pub const PUBLISHED: &str = "publish";

/// Query for [`CatalogClient::fetch_products`].
///
/// Every field maps to one query parameter; absent fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: Option<u64>,
    pub per_page: Option<u32>,
    pub status: Option<String>,
    pub slug: Option<String>,
}

impl ProductFilter {
    /// A filter for published products only.
    #[must_use]
    pub fn published() -> Self {
        Self {
            status: Some(PUBLISHED.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_category(mut self, category_id: u64) -> Self {
        self.category = Some(category_id);
        self
    }

    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    fn effective_per_page(&self, default_per_page: u32) -> u32 {
        self.per_page
            .unwrap_or(default_per_page)
            .clamp(1, MAX_PER_PAGE)
    }
}

/// Consumer key and secret, sent as HTTP Basic credentials.
#[derive(Clone)]
struct Credentials {
    consumer_key: String,
    consumer_secret: String,
}

impl Credentials {
    fn from_settings(settings: &CatalogSettings) -> Option<Self> {
        let key = settings.consumer_key.as_deref().map(str::trim)?;
        let secret = settings.consumer_secret.as_deref().map(str::trim)?;
        if key.is_empty() || secret.is_empty() {
            return None;
        }
        Some(Self {
            consumer_key: key.to_owned(),
            consumer_secret: secret.to_owned(),
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credentials([redacted])")
    }
}

/// Catalog fetcher for a WooCommerce-compatible REST API.
///
/// Each call is a single attempt bounded by the client timeout: no retries,
/// no caching. Missing settings surface as [`CatalogError::Configuration`]
/// before any request is sent, so a partially configured deployment still
/// renders its degraded pages.
#[derive(Debug)]
pub struct CatalogClient {
    client: Client,
    base_url: Option<Url>,
    credentials: Option<Credentials>,
    default_per_page: u32,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with the given settings, request timeout and
    /// `User-Agent`.
    ///
    /// Missing credentials or base URL are accepted here and reported on the
    /// first fetch.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Configuration`] if the base URL is present but
    /// invalid, or the HTTP client cannot be constructed.
    pub fn new(
        settings: &CatalogSettings,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let client = build_http_client(timeout_secs, user_agent)?;
        let base_url = settings
            .base_url
            .as_deref()
            .map(endpoint::catalog_base_url)
            .transpose()?;

        Ok(Self {
            client,
            base_url,
            credentials: Credentials::from_settings(settings),
            default_per_page: DEFAULT_PER_PAGE,
        })
    }

    /// Creates a `CatalogClient` from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`CatalogClient::new`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, CatalogError> {
        Ok(
            Self::new(&config.catalog, config.request_timeout_secs, &config.user_agent)?
                .with_default_per_page(config.default_per_page),
        )
    }

    #[must_use]
    pub fn with_default_per_page(mut self, per_page: u32) -> Self {
        self.default_per_page = per_page.clamp(1, MAX_PER_PAGE);
        self
    }

    /// Fetches one page of products matching `filter`.
    ///
    /// A category with no matching products yields `Ok(vec![])`. Entries the
    /// normalizer cannot decode are skipped with a warning.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Configuration`] — base URL or credentials missing (no request sent).
    /// - [`CatalogError::Remote`] — non-2xx status, upstream status code preserved.
    /// - [`CatalogError::Transport`] — network failure or timeout.
    /// - [`CatalogError::Decode`] — 2xx body is not a JSON array.
    pub async fn fetch_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, CatalogError> {
        let (base_url, credentials) = self.ready()?;
        self.fetch_products_with(base_url, credentials, filter).await
    }

    /// Fetches the published product whose slug is exactly `slug`.
    ///
    /// Returns `Ok(None)` when no such product exists or `slug` is blank.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::fetch_products`].
    pub async fn fetch_product_by_slug(&self, slug: &str) -> Result<Option<Product>, CatalogError> {
        let (base_url, credentials) = self.ready()?;
        let slug = slug.trim();
        if slug.is_empty() {
            return Ok(None);
        }

        let filter = ProductFilter::published().with_slug(slug).with_per_page(1);
        let products = self
            .fetch_products_with(base_url, credentials, &filter)
            .await?;
        Ok(products.into_iter().find(|p| p.slug == slug))
    }

    async fn fetch_products_with(
        &self,
        base_url: &Url,
        credentials: &Credentials,
        filter: &ProductFilter,
    ) -> Result<Vec<Product>, CatalogError> {
        let url = endpoint::products_url(base_url, filter, self.default_per_page)?;

        let entries = self
            .get_entries(url, credentials, "products")
            .await
            .inspect_err(|e| log_failure(e, "products"))?;

        let products: Vec<Product> = decode_entries::<WooProduct>(entries, "product")
            .into_iter()
            .map(normalize_product)
            .collect();

        tracing::debug!(
            count = products.len(),
            category = ?filter.category,
            status = ?filter.status,
            "fetched products"
        );
        Ok(products)
    }

    /// Resolves the settings every request needs, refusing before any network
    /// call when one is missing.
    fn ready(&self) -> Result<(&Url, &Credentials), CatalogError> {
        let result = match (&self.base_url, &self.credentials) {
            (None, _) => Err(CatalogError::configuration(
                "catalog base URL (WOOCOMMERCE_URL) is not set",
            )),
            (_, None) => Err(CatalogError::configuration(
                "consumer key or secret is missing",
            )),
            (Some(base_url), Some(credentials)) => Ok((base_url, credentials)),
        };

        if let Err(e) = &result {
            tracing::error!(error.kind = e.kind(), error = %e, "catalog request refused");
        }
        result
    }

    /// Sends an authenticated GET and returns the JSON array body, undecoded.
    async fn get_entries(
        &self,
        url: Url,
        credentials: &Credentials,
        what: &'static str,
    ) -> Result<Vec<Value>, CatalogError> {
        tracing::debug!(%url, "requesting {what}");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .basic_auth(&credentials.consumer_key, Some(&credentials.consumer_secret))
            .send()
            .await
            .map_err(|e| CatalogError::transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            // The body is only used for the error message; a read failure
            // here must not mask the status.
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Remote {
                status_code: status.as_u16(),
                message: remote_message(&body, status, what),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::transport(&e))?;

        serde_json::from_str::<Vec<Value>>(&body).map_err(|e| CatalogError::Decode {
            context: format!("{what} response"),
            source: e,
        })
    }
}

/// Picks the upstream's own error text when it sent a WooCommerce error
/// envelope, otherwise describes the status.
fn remote_message(body: &str, status: StatusCode, what: &str) -> String {
    serde_json::from_str::<WooErrorBody>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .map(|message| message.trim().to_owned())
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            format!(
                "Error fetching {what}: {}",
                status.canonical_reason().unwrap_or("unexpected status")
            )
        })
}

fn log_failure(err: &CatalogError, what: &str) {
    match err {
        CatalogError::Remote { status_code, .. } => tracing::warn!(
            status_code,
            error.kind = err.kind(),
            error = %err,
            "{what} request rejected by catalog"
        ),
        _ => tracing::warn!(error.kind = err.kind(), error = %err, "{what} request failed"),
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
