//! Raw response types for the WooCommerce REST API and the slides endpoint.
//!
//! ## Observed looseness
//!
//! ### Ids
//! WooCommerce sends numeric ids; headless proxies in front of it sometimes
//! re-serialize them as strings. [`RawId`] accepts both for product and
//! slide ids; category ids accept numeric strings and stay numeric.
//!
//! ### Text fields
//! `description`, `short_description` and the price fields may be `null`,
//! absent, or (for prices from some plugins) bare numbers. They all collapse
//! to a `String`, empty when there is nothing.
//!
//! ### `images` / `categories`
//! Usually arrays, occasionally `null` or `false` on products created through
//! importers. Anything that is not an array becomes an empty list, and array
//! entries that do not decode are dropped one by one.
//!
//! ### Slides
//! Operator CMSs disagree on naming: an image variant's URL arrives as `url`
//! or `src`, its alt text as `alt` or `alt_text`, dimensions as numbers or
//! numeric strings. The list itself may be bare or wrapped in `slides`/`data`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// An identifier that may be encoded as a JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

/// A product from `GET /products`.
#[derive(Debug, Deserialize)]
pub struct WooProduct {
    pub id: RawId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub short_description: String,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub images: Vec<WooImage>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub price: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub regular_price: String,
    /// Empty string when the product has no sale price.
    #[serde(default, deserialize_with = "lenient_string")]
    pub sale_price: String,
    #[serde(default)]
    pub stock_status: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub categories: Vec<WooCategoryRef>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WooImage {
    #[serde(default, deserialize_with = "lenient_string")]
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Category reference embedded in a product.
#[derive(Debug, Deserialize)]
pub struct WooCategoryRef {
    #[serde(deserialize_with = "numeric_id")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
}

/// A category from `GET /products/categories`.
#[derive(Debug, Deserialize)]
pub struct WooCategory {
    #[serde(deserialize_with = "numeric_id")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: String,
    #[serde(default)]
    pub count: Option<u32>,
}

/// Error envelope WooCommerce returns on failure, e.g.
/// `{"code":"woocommerce_rest_cannot_view","message":"...","data":{"status":401}}`.
#[derive(Debug, Deserialize)]
pub struct WooErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A slide from the operator's slides endpoint.
#[derive(Debug, Deserialize)]
pub struct RawSlide {
    pub id: RawId,
    #[serde(default)]
    pub desktop: Option<RawSlideImage>,
    #[serde(default)]
    pub mobile: Option<RawSlideImage>,
    #[serde(default, alias = "category")]
    pub categoria: Option<String>,
    #[serde(default, alias = "href")]
    pub link: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawSlideImage {
    #[serde(default, alias = "src")]
    pub url: Option<String>,
    #[serde(default, alias = "alt_text")]
    pub alt: Option<String>,
    #[serde(default, deserialize_with = "lenient_dimension")]
    pub width: Option<u32>,
    #[serde(default, deserialize_with = "lenient_dimension")]
    pub height: Option<u32>,
}

/// Body of the slides endpoint: a bare array or an object wrapping one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SlidesBody {
    Bare(Vec<Value>),
    Wrapped {
        #[serde(alias = "data")]
        slides: Vec<Value>,
    },
}

impl SlidesBody {
    #[must_use]
    pub fn into_entries(self) -> Vec<Value> {
        match self {
            SlidesBody::Bare(entries) | SlidesBody::Wrapped { slides: entries } => entries,
        }
    }
}

/// Decodes each entry independently, dropping the ones that do not fit `T`.
///
/// One malformed product must not blank a whole rail.
pub(crate) fn decode_entries<T: DeserializeOwned>(entries: Vec<Value>, what: &str) -> Vec<T> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<T>(entry) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping undecodable {what} entry");
                None
            }
        })
        .collect()
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping undecodable nested entry");
                    None
                }
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// A numeric id sent either as a JSON number or as a numeric string.
fn numeric_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Number(n) => Ok(n),
        RawId::Text(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| serde::de::Error::custom(format!("id '{s}' is not numeric"))),
    }
}

fn lenient_dimension<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Some(Value::String(s)) => s.trim().parse::<u32>().ok(),
        _ => None,
    })
}
