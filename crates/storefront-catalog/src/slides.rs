//! Home-page slide fetcher.
//!
//! Slides are decorative: every failure collapses to an empty carousel so the
//! rest of the page renders.

use reqwest::{Client, Url};
use storefront_core::{AppConfig, Banner, Slide};

use crate::error::CatalogError;
use crate::http::{build_http_client, parse_http_url};
use crate::normalize::{normalize_slide, slide_from_raw};
use crate::types::{decode_entries, RawSlide, SlidesBody};

#[derive(Debug)]
pub struct SlideClient {
    client: Client,
    url: Option<Url>,
}

impl SlideClient {
    /// Creates a `SlideClient` for the full slides endpoint `url`.
    ///
    /// A missing or unparseable URL is logged and leaves the client
    /// unconfigured; [`SlideClient::fetch_home_slides`] then returns no
    /// banners.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Configuration`] only if the HTTP client
    /// cannot be constructed.
    pub fn new(url: Option<&str>, timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        let client = build_http_client(timeout_secs, user_agent)?;
        let url = match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(raw) => match parse_http_url(raw) {
                Ok(url) => Some(url),
                Err(reason) => {
                    tracing::warn!(reason = %reason, "ignoring invalid slides URL");
                    None
                }
            },
            None => None,
        };
        Ok(Self { client, url })
    }

    /// # Errors
    ///
    /// See [`SlideClient::new`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, CatalogError> {
        Self::new(
            config.slides_url.as_deref(),
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Fetches the home-page banners, in source order.
    ///
    /// Never fails: any error is logged at `warn` and yields an empty list.
    pub async fn fetch_home_slides(&self) -> Vec<Banner> {
        match self.try_fetch_slides().await {
            Ok(slides) => {
                let banners: Vec<Banner> = slides.into_iter().map(normalize_slide).collect();
                tracing::debug!(count = banners.len(), "fetched home slides");
                banners
            }
            Err(e) => {
                tracing::warn!(
                    error.kind = e.kind(),
                    error = %e,
                    "slides unavailable, rendering without banners"
                );
                Vec::new()
            }
        }
    }

    /// Fetches and decodes the raw slides, surfacing every failure.
    ///
    /// Slides without both image variants are dropped, not reported.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the URL is not configured, the request
    /// fails, the endpoint answers non-2xx, or the body is not a slide list.
    pub async fn try_fetch_slides(&self) -> Result<Vec<Slide>, CatalogError> {
        let url = self
            .url
            .clone()
            .ok_or_else(|| CatalogError::configuration("slides URL (SLIDES_API_URL) is not set"))?;

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Remote {
                status_code: status.as_u16(),
                message: format!(
                    "Error fetching slides: {}",
                    status.canonical_reason().unwrap_or("unexpected status")
                ),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::transport(&e))?;
        let parsed: SlidesBody = serde_json::from_str(&body).map_err(|e| CatalogError::Decode {
            context: "slides response".to_string(),
            source: e,
        })?;

        Ok(decode_entries::<RawSlide>(parsed.into_entries(), "slide")
            .into_iter()
            .filter_map(slide_from_raw)
            .collect())
    }
}
