//! Route tables and the assembled application router.

mod common;
mod shop;

pub use common::common_routes;
pub use shop::shop_routes;

use crate::config::ServerConfig;
use crate::response::respond_error;
use crate::state::AppState;
use axum::{
    extract::{DefaultBodyLimit, Request},
    http::StatusCode,
    response::Response,
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Shop and common routes with request tracing, the body size limit, and JSON
/// 404s for unknown paths.
pub fn app_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(shop_routes(state))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(config.body_limit)),
        )
}

async fn not_found(req: Request) -> Response {
    respond_error(StatusCode::NOT_FOUND, format!("no route for {}", req.uri().path()))
}

/// Method fallback for every route, so a wrong verb still gets a JSON body.
pub(crate) async fn method_not_allowed(req: Request) -> Response {
    respond_error(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("method {} not allowed on {}", req.method(), req.uri().path()),
    )
}
