//! Liveness probe for load balancers and orchestrators. Answers as long as the
//! process is accepting connections.
use axum::Json;

use shared_http::api::HealthResponse;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
