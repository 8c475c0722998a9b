//! Endpoint URL construction for the catalog client.

use reqwest::Url;

use super::ProductFilter;
use crate::error::CatalogError;
use crate::http::parse_http_url;

/// Largest page size WooCommerce accepts for `per_page`.
pub const MAX_PER_PAGE: u32 = 100;

/// Parses the catalog base URL and makes sure it ends with exactly one slash,
/// so relative joins append to its path instead of replacing the last
/// segment: `https://shop.example/wp-json/wc/v3` joins `products` as
/// `https://shop.example/wp-json/wc/v3/products`.
pub(super) fn catalog_base_url(raw: &str) -> Result<Url, CatalogError> {
    let normalised = format!("{}/", raw.trim().trim_end_matches('/'));
    parse_http_url(&normalised).map_err(CatalogError::configuration)
}

/// Builds `GET {base}/products` with the filter's query parameters.
pub(super) fn products_url(
    base: &Url,
    filter: &ProductFilter,
    default_per_page: u32,
) -> Result<Url, CatalogError> {
    let mut url = join(base, "products")?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair(
            "per_page",
            &filter.effective_per_page(default_per_page).to_string(),
        );
        if let Some(category) = filter.category {
            query.append_pair("category", &category.to_string());
        }
        if let Some(status) = filter.status.as_deref() {
            query.append_pair("status", status);
        }
        if let Some(slug) = filter.slug.as_deref() {
            query.append_pair("slug", slug);
        }
    }
    Ok(url)
}

/// Builds `GET {base}/products/categories` for the full category list.
pub(super) fn categories_url(base: &Url) -> Result<Url, CatalogError> {
    let mut url = join(base, "products/categories")?;
    url.query_pairs_mut()
        .append_pair("per_page", &MAX_PER_PAGE.to_string());
    Ok(url)
}

fn join(base: &Url, path: &str) -> Result<Url, CatalogError> {
    base.join(path).map_err(|e| {
        CatalogError::configuration(format!("cannot build {path} URL from {base}: {e}"))
    })
}
