use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response},
    routing::get,
    Router,
};
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::handlers;

pub const HOME_PATH: &str = "/";
pub const HEALTH_PATH: &str = "/health";

/// Router wrapped so trailing slashes are trimmed before routing.
pub type App = NormalizePath<Router>;

/// Build the route table with request tracing.
pub fn build_router() -> Router {
    Router::new()
        .route(HOME_PATH, get(handlers::home))
        .route(HEALTH_PATH, get(handlers::health_check))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<Body>| {
                    tracing::info_span!("request", method = %req.method(), uri = %req.uri())
                })
                .on_response(|res: &Response<Body>, latency: Duration, _span: &Span| {
                    if res.status().is_server_error() {
                        tracing::error!(status = %res.status().as_u16(), latency = ?latency);
                    } else if res.status().is_client_error() {
                        tracing::warn!(status = %res.status().as_u16(), latency = ?latency);
                    } else {
                        tracing::info!(status = %res.status().as_u16(), latency = ?latency);
                    }
                })
                .on_failure(()),
        )
}

/// Build the full application service.
///
/// Path normalization has to wrap the router rather than sit inside it, since
/// layers added with `Router::layer` only run after a route has been matched.
pub fn build_app() -> App {
    NormalizePath::trim_trailing_slash(build_router())
}
