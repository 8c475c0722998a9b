use serde::{Deserialize, Serialize};

/// A catalog product, normalized from the upstream API and ready to render.
///
/// Text fields are never absent: the normalizer collapses `null` and missing
/// values into empty strings so templates need no null checks beyond the
/// explicitly optional image `alt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Upstream identifier, kept as text whether it arrived as a number or a string.
    pub id: String,
    /// URL-safe identifier used for routing, e.g. `"vans-ultrarange-2"`.
    pub slug: String,
    pub name: String,
    /// Raw HTML, passed through verbatim.
    pub description: String,
    /// Raw HTML, passed through verbatim.
    pub short_description: String,
    pub images: Vec<ProductImage>,
    /// Current price as a decimal string, exactly as the catalog returns it.
    pub price: String,
    pub regular_price: String,
    /// Empty when no sale is configured.
    pub sale_price: String,
    pub on_sale: bool,
    pub stock_status: StockStatus,
    pub categories: Vec<CategoryRef>,
    /// Publish state, e.g. `"publish"` or `"draft"`.
    pub status: String,
}

impl Product {
    /// The first image, used as the card and detail-page hero.
    #[must_use]
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images.first()
    }

    /// Price to show when the product is not on sale.
    #[must_use]
    pub fn display_price(&self) -> &str {
        if self.price.is_empty() {
            &self.regular_price
        } else {
            &self.price
        }
    }

    /// Whether the purchase button should be enabled.
    #[must_use]
    pub fn is_purchasable(&self) -> bool {
        self.stock_status == StockStatus::InStock
    }

    #[must_use]
    pub fn in_category(&self, category_id: u64) -> bool {
        self.categories.iter().any(|c| c.id == category_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub src: String,
    pub alt: Option<String>,
}

/// A category reference embedded in a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    InStock,
    OutOfStock,
    OnBackorder,
}

impl StockStatus {
    /// Parses the upstream `stock_status` string.
    ///
    /// Unknown or missing values map to [`StockStatus::OutOfStock`] so that an
    /// unrecognized state never offers a purchase.
    #[must_use]
    pub fn from_upstream(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("instock") => StockStatus::InStock,
            Some("onbackorder") => StockStatus::OnBackorder,
            _ => StockStatus::OutOfStock,
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::InStock => write!(f, "instock"),
            StockStatus::OutOfStock => write!(f, "outofstock"),
            StockStatus::OnBackorder => write!(f, "onbackorder"),
        }
    }
}
