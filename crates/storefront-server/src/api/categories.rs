use axum::{extract::State, Extension, Json};
use storefront_core::Category;

use crate::middleware::RequestId;

use super::{map_catalog_error, ApiError, ApiResponse, AppState};

pub(super) async fn list_categories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<Category>>>, ApiError> {
    let data = state
        .catalog
        .fetch_categories()
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;

    Ok(ApiResponse::new(data, req_id))
}
