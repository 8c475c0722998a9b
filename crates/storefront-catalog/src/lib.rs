//! WooCommerce catalog and slide fetchers, plus the page composers built on
//! them.

pub mod client;
pub mod compose;
pub mod error;
mod http;
pub mod normalize;
pub mod slides;
pub mod types;

pub use client::{CatalogClient, ProductFilter, DEFAULT_PER_PAGE, MAX_PER_PAGE, PUBLISHED};
pub use compose::{
    compose_home, compose_product_page, plan_rails, HomePage, ProductPage, Rail, RailPlan,
    RailState, StorefrontDisplay, FEATURED_TITLE,
};
pub use error::{CatalogError, CATALOG_UNAVAILABLE};
pub use normalize::{normalize_category, normalize_product, normalize_slide, slide_from_raw};
pub use slides::SlideClient;
