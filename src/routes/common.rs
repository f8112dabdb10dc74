//! Operational routes: liveness, database readiness, build info.

use crate::response::respond_json;
use crate::routes::method_not_allowed;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Response, routing::get, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Probe {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn health() -> Response {
    respond_json(
        StatusCode::OK,
        Probe {
            status: "ok",
            database: None,
        },
    )
}

async fn ready(State(state): State<AppState>) -> Response {
    let (status, probe) = match sqlx::query("SELECT 1").fetch_optional(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Probe {
                status: "ok",
                database: Some("ok"),
            },
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Probe {
                    status: "degraded",
                    database: Some("unavailable"),
                },
            )
        }
    };
    respond_json(status, probe)
}

async fn build_info() -> Response {
    respond_json(
        StatusCode::OK,
        BuildInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        },
    )
}

/// GET /health, GET /ready (one query against the pool), GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health).fallback(method_not_allowed))
        .route("/ready", get(ready).fallback(method_not_allowed))
        .route("/version", get(build_info).fallback(method_not_allowed))
        .with_state(state)
}
