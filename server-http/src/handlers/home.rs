use axum::Json;

use shared_http::api::HomeResponse;

/// GET /
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse::welcome())
}
