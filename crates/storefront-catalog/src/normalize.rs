//! Normalization from raw API types to the `storefront_core` data model.
//!
//! Everything here is infallible at the item level: inconsistencies are
//! collapsed into the renderable shape, and items that cannot be rendered at
//! all are dropped by the `Option`-returning helpers.

use std::str::FromStr;

use rust_decimal::Decimal;
use storefront_core::{
    category_anchor, Banner, Category, CategoryRef, Product, ProductImage, Slide, SlideImage,
    StockStatus,
};

use crate::types::{RawSlide, RawSlideImage, WooCategory, WooImage, WooProduct};

/// Normalizes a raw [`WooProduct`] into a [`Product`].
#[must_use]
pub fn normalize_product(product: WooProduct) -> Product {
    let on_sale = is_on_sale(&product.regular_price, &product.sale_price);

    let images = product
        .images
        .into_iter()
        .filter_map(normalize_image)
        .collect();

    let categories = product
        .categories
        .into_iter()
        .map(|c| CategoryRef {
            id: c.id,
            name: c.name,
        })
        .collect();

    Product {
        id: product.id.into_string(),
        slug: product.slug,
        name: product.name,
        description: product.description,
        short_description: product.short_description,
        images,
        price: product.price,
        regular_price: product.regular_price,
        sale_price: product.sale_price,
        on_sale,
        stock_status: StockStatus::from_upstream(product.stock_status.as_deref()),
        categories,
        status: product.status.unwrap_or_default(),
    }
}

/// Normalizes a raw [`WooCategory`] into a [`Category`].
#[must_use]
pub fn normalize_category(category: WooCategory) -> Category {
    Category {
        id: category.id,
        name: category.name,
        slug: category.slug,
        count: category.count,
    }
}

/// Turns a raw slide into a [`Slide`], or `None` when either image variant
/// has no URL.
#[must_use]
pub fn slide_from_raw(raw: RawSlide) -> Option<Slide> {
    let id = raw.id.into_string();
    let desktop = raw.desktop.and_then(slide_image_from_raw);
    let mobile = raw.mobile.and_then(slide_image_from_raw);

    let (Some(desktop), Some(mobile)) = (desktop, mobile) else {
        tracing::warn!(slide_id = %id, "dropping slide without both desktop and mobile images");
        return None;
    };

    Some(Slide {
        id,
        desktop,
        mobile,
        categoria: non_blank(raw.categoria),
        link: non_blank(raw.link),
        title: non_blank(raw.title),
    })
}

/// Normalizes a [`Slide`] into the [`Banner`] the hero carousel renders.
///
/// Alt text falls back from the desktop alt to the mobile alt to
/// `"Banner {id}"`. The link falls back, in this order, from a category
/// anchor (`"/#nike"`) to the raw `link` to the `"#"` placeholder.
#[must_use]
pub fn normalize_slide(slide: Slide) -> Banner {
    let alt_text = slide
        .desktop
        .alt
        .or(slide.mobile.alt)
        .unwrap_or_else(|| format!("Banner {}", slide.id));

    let link_url = banner_link(slide.categoria.as_deref(), slide.link.as_deref());

    Banner {
        id: slide.id,
        image_desktop: slide.desktop.url,
        image_mobile: slide.mobile.url,
        alt_text,
        link_url,
        desktop_width: slide.desktop.width,
        desktop_height: slide.desktop.height,
        mobile_width: slide.mobile.width,
        mobile_height: slide.mobile.height,
    }
}

fn banner_link(categoria: Option<&str>, link: Option<&str>) -> String {
    if let Some(categoria) = categoria.map(str::trim).filter(|c| !c.is_empty()) {
        return format!("/#{}", category_anchor(categoria));
    }
    if let Some(link) = link.map(str::trim).filter(|l| !l.is_empty()) {
        return link.to_string();
    }
    "#".to_string()
}

fn normalize_image(image: WooImage) -> Option<ProductImage> {
    if image.src.trim().is_empty() {
        return None;
    }
    Some(ProductImage {
        src: image.src,
        alt: non_blank(image.alt),
    })
}

fn slide_image_from_raw(image: RawSlideImage) -> Option<SlideImage> {
    let url = non_blank(image.url)?;
    Some(SlideImage {
        url,
        alt: non_blank(image.alt),
        width: image.width,
        height: image.height,
    })
}

/// A product is on sale when it has a sale price that differs from the
/// regular price. Prices are compared as decimals so `"100"` and `"100.00"`
/// are equal; unparseable prices fall back to text comparison.
fn is_on_sale(regular_price: &str, sale_price: &str) -> bool {
    let sale = sale_price.trim();
    if sale.is_empty() {
        return false;
    }
    let regular = regular_price.trim();
    match (Decimal::from_str(regular), Decimal::from_str(sale)) {
        (Ok(regular), Ok(sale)) => regular != sale,
        _ => regular != sale,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
