//! Page-data composition: the concurrent fetches behind each storefront page.
//!
//! Every fetch for a page is issued at once and joined before the page is
//! returned. A failing rail degrades only itself; a failing slide fetch only
//! empties the carousel.

use futures::future::join_all;
use serde::Serialize;
use storefront_core::{
    category_anchor, filter_active_categories, Banner, BrandColors, OperatorConfig, Product,
};

use crate::client::{CatalogClient, ProductFilter};
use crate::error::CatalogError;
use crate::slides::SlideClient;

/// Title of the single rail shown when the operator scopes nothing.
pub const FEATURED_TITLE: &str = "Featured";

/// Display settings handed to the presentation layer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorefrontDisplay {
    pub display_name: Option<String>,
    pub contact_phone: Option<String>,
    pub brand_colors: BrandColors,
}

impl From<&OperatorConfig> for StorefrontDisplay {
    fn from(operator: &OperatorConfig) -> Self {
        Self {
            display_name: operator.display_name.clone(),
            contact_phone: operator.contact_phone.clone(),
            brand_colors: operator.brand_colors.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
    pub storefront: StorefrontDisplay,
    pub banners: Vec<Banner>,
    pub rails: Vec<Rail>,
    /// Set when the category list itself could not be loaded, so no
    /// category rails could be planned.
    pub catalog_error: Option<String>,
}

/// One product rail on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rail {
    pub title: String,
    pub category_id: Option<u64>,
    /// Fragment that banner links (`/#nike`) scroll to. Derived from the
    /// catalog category name, not the rail title, so a custom title still
    /// matches the banner's `categoria`.
    pub anchor: String,
    #[serde(flatten)]
    pub state: RailState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RailState {
    Loaded { products: Vec<Product> },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ProductPage {
    Found { product: Product },
    NotFound { slug: String },
    Failed { message: String },
}

/// A rail to fetch: `category_id: None` is the unscoped featured rail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RailPlan {
    pub category_id: Option<u64>,
    pub title: String,
    /// Catalog name of the category, when planning already looked it up.
    pub category_name: Option<String>,
}

impl RailPlan {
    fn featured() -> Self {
        Self {
            category_id: None,
            title: FEATURED_TITLE.to_string(),
            category_name: None,
        }
    }

    /// Anchor source: the known category name, else the name the loaded
    /// products carry for this category, else the title.
    fn anchor(&self, products: &[Product]) -> String {
        let from_products = || {
            let id = self.category_id?;
            products
                .iter()
                .flat_map(|product| &product.categories)
                .find(|category| category.id == id)
                .map(|category| category.name.as_str())
        };
        let name = self
            .category_name
            .as_deref()
            .or_else(from_products)
            .unwrap_or(self.title.as_str());
        category_anchor(name)
    }

    fn filter(&self) -> ProductFilter {
        let filter = ProductFilter::published();
        match self.category_id {
            Some(id) => filter.with_category(id),
            None => filter,
        }
    }
}

/// Decides which rails the home page shows.
///
/// Explicit `home_rails` win. Otherwise `active_categories` selects rails from
/// the live category list, in catalog order. With neither, one featured rail.
///
/// # Errors
///
/// Returns the [`CatalogError`] from the category list fetch, when one is
/// needed.
pub async fn plan_rails(
    catalog: &CatalogClient,
    operator: &OperatorConfig,
) -> Result<Vec<RailPlan>, CatalogError> {
    if !operator.home_rails.is_empty() {
        return Ok(operator
            .home_rails
            .iter()
            .map(|rail| RailPlan {
                category_id: Some(rail.category_id),
                title: rail.title.clone(),
                category_name: None,
            })
            .collect());
    }

    let Some(active) = operator.active_category_set() else {
        return Ok(vec![RailPlan::featured()]);
    };
    if active.is_empty() {
        return Ok(Vec::new());
    }

    let categories = catalog.fetch_categories().await?;
    Ok(filter_active_categories(&categories, &active)
        .into_iter()
        .map(|category| RailPlan {
            category_id: Some(category.id),
            title: category.name.clone(),
            category_name: Some(category.name),
        })
        .collect())
}

/// Composes the home page: banners and product rails, fetched concurrently.
///
/// Always returns a page. Rails that loaded but came back empty are omitted.
pub async fn compose_home(
    catalog: &CatalogClient,
    slides: &SlideClient,
    operator: &OperatorConfig,
) -> HomePage {
    let (banners, rails) = tokio::join!(slides.fetch_home_slides(), load_rails(catalog, operator));

    let (rails, catalog_error) = match rails {
        Ok(rails) => (rails, None),
        Err(e) => (Vec::new(), Some(e.user_message())),
    };

    tracing::info!(
        banners = banners.len(),
        rails = rails.len(),
        degraded = catalog_error.is_some(),
        "composed home page"
    );

    HomePage {
        storefront: StorefrontDisplay::from(operator),
        banners,
        rails,
        catalog_error,
    }
}

async fn load_rails(
    catalog: &CatalogClient,
    operator: &OperatorConfig,
) -> Result<Vec<Rail>, CatalogError> {
    let plans = plan_rails(catalog, operator).await?;

    let results = join_all(plans.iter().map(|plan| {
        let filter = plan.filter();
        async move { catalog.fetch_products(&filter).await }
    }))
    .await;

    Ok(plans
        .into_iter()
        .zip(results)
        .filter_map(|(plan, result)| {
            let (anchor, state) = match result {
                Ok(products) if products.is_empty() => return None,
                Ok(products) => (plan.anchor(&products), RailState::Loaded { products }),
                Err(e) => (
                    plan.anchor(&[]),
                    RailState::Failed {
                        message: e.user_message(),
                    },
                ),
            };
            Some(Rail {
                anchor,
                title: plan.title,
                category_id: plan.category_id,
                state,
            })
        })
        .collect())
}

/// Composes the product detail page for `slug`.
pub async fn compose_product_page(catalog: &CatalogClient, slug: &str) -> ProductPage {
    match catalog.fetch_product_by_slug(slug).await {
        Ok(Some(product)) => ProductPage::Found { product },
        Ok(None) => ProductPage::NotFound {
            slug: slug.trim().to_string(),
        },
        Err(e) => ProductPage::Failed {
            message: e.user_message(),
        },
    }
}
