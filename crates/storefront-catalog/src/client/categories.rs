//! Category listing for `CatalogClient`.

use storefront_core::Category;

use super::{endpoint, log_failure, CatalogClient};
use crate::error::CatalogError;
use crate::normalize::normalize_category;
use crate::types::{decode_entries, WooCategory};

impl CatalogClient {
    /// Fetches the catalog's category list, in catalog order.
    ///
    /// Only the first page (up to 100 categories) is read; storefronts that
    /// scope their home page by category stay well under that.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`CatalogClient::fetch_products`].
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let (base_url, credentials) = self.ready()?;
        let url = endpoint::categories_url(base_url)?;

        let entries = self
            .get_entries(url, credentials, "categories")
            .await
            .inspect_err(|e| log_failure(e, "categories"))?;

        let categories: Vec<Category> = decode_entries::<WooCategory>(entries, "category")
            .into_iter()
            .map(normalize_category)
            .collect();

        tracing::debug!(count = categories.len(), "fetched categories");
        Ok(categories)
    }
}
