//! Subcommands that read from the catalog and slides endpoints.
//!
//! Every command prints pretty JSON on stdout. Catalog errors propagate so
//! the process exits non-zero; slide failures do not, matching the storefront.

use serde::Serialize;
use storefront_catalog::{compose_home, CatalogClient, ProductFilter, SlideClient};
use storefront_core::AppConfig;

/// Fetch one page of products and print them.
///
/// # Errors
///
/// Returns an error if the catalog is not configured or the fetch fails.
pub(crate) async fn run_products(config: &AppConfig, filter: &ProductFilter) -> anyhow::Result<()> {
    let catalog = CatalogClient::from_app_config(config)?;
    let products = catalog.fetch_products(filter).await?;

    if products.is_empty() {
        eprintln!(
            "no products found{}",
            filter
                .category
                .map(|c| format!(" in category {c}"))
                .unwrap_or_default()
        );
    }
    print_json(&products)
}

/// Fetch one product by slug and print it.
///
/// # Errors
///
/// Returns an error if the product does not exist or the fetch fails.
pub(crate) async fn run_product(config: &AppConfig, slug: &str) -> anyhow::Result<()> {
    let catalog = CatalogClient::from_app_config(config)?;
    match catalog.fetch_product_by_slug(slug).await? {
        Some(product) => print_json(&product),
        None => anyhow::bail!("product '{slug}' not found"),
    }
}

/// # Errors
///
/// Returns an error if the catalog is not configured or the fetch fails.
pub(crate) async fn run_categories(config: &AppConfig) -> anyhow::Result<()> {
    let catalog = CatalogClient::from_app_config(config)?;
    print_json(&catalog.fetch_categories().await?)
}

/// Print the home-page banners. An unreachable slides endpoint prints `[]`.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be built.
pub(crate) async fn run_slides(config: &AppConfig) -> anyhow::Result<()> {
    let slides = SlideClient::from_app_config(config)?;
    print_json(&slides.fetch_home_slides().await)
}

/// Compose and print the home page, including any degraded rails.
///
/// # Errors
///
/// Returns an error if the operator file is invalid or a client cannot be
/// built.
pub(crate) async fn run_home(config: &AppConfig) -> anyhow::Result<()> {
    let operator = storefront_core::load_operator_or_default(config.operator_path.as_deref())?;
    let catalog = CatalogClient::from_app_config(config)?;
    let slides = SlideClient::from_app_config(config)?;

    let page = compose_home(&catalog, &slides, &operator).await;
    if let Some(message) = &page.catalog_error {
        tracing::warn!(message = %message, "home page rendered without category rails");
    }
    print_json(&page)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
