//! Composed page payloads. Both routes answer 200; degraded states are part
//! of the body.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use storefront_catalog::{compose_home, compose_product_page, HomePage, ProductPage};

use crate::middleware::RequestId;

use super::{ApiResponse, AppState};

pub(super) async fn home_page(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<HomePage>> {
    let page = compose_home(&state.catalog, &state.slides, &state.operator).await;
    ApiResponse::new(page, req_id)
}

pub(super) async fn product_page(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Json<ApiResponse<ProductPage>> {
    let page = compose_product_page(&state.catalog, &slug).await;
    ApiResponse::new(page, req_id)
}
