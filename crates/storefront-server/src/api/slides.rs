use axum::{extract::State, Extension, Json};
use storefront_core::Banner;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState};

/// Always 200: slide failures are logged by the fetcher and render as `[]`.
pub(super) async fn list_slides(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<Banner>>> {
    ApiResponse::new(state.slides.fetch_home_slides().await, req_id)
}
