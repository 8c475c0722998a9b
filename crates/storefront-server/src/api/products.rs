use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use storefront_catalog::ProductFilter;
use storefront_core::Product;

use crate::middleware::RequestId;

use super::{map_catalog_error, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct ProductQuery {
    pub category: Option<u64>,
    pub per_page: Option<u32>,
    pub status: Option<String>,
}

impl From<ProductQuery> for ProductFilter {
    fn from(query: ProductQuery) -> Self {
        ProductFilter {
            category: query.category,
            per_page: query.per_page,
            status: query.status.filter(|s| !s.trim().is_empty()),
            slug: None,
        }
    }
}

pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<Product>>>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        ApiError::new(req_id.0.clone(), "bad_request", rejection.body_text())
    })?;

    let data = state
        .catalog
        .fetch_products(&query.into())
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;

    Ok(ApiResponse::new(data, req_id))
}

pub(super) async fn get_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let product = state
        .catalog
        .fetch_product_by_slug(&slug)
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;

    match product {
        Some(product) => Ok(ApiResponse::new(product, req_id)),
        None => Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("product '{slug}' not found"),
        )),
    }
}
