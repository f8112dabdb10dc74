//! Product handlers: list, fetch by id, create.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::handlers::parse_id;
use crate::models::NewProduct;
use crate::response::respond_json;
use crate::service::ProductService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

pub async fn list_products(State(state): State<AppState>) -> Result<Response, AppError> {
    let products = ProductService::list(&state.pool).await?;
    Ok(respond_json(StatusCode::OK, products))
}

pub async fn fetch_product(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id_str)?;
    let product = ProductService::get_by_id(&state.pool, id).await?;
    Ok(respond_json(StatusCode::OK, product))
}

pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewProduct>,
) -> Result<Response, AppError> {
    let product = ProductService::create(&state.pool, body).await?;
    tracing::info!(product_id = product.id, "product created");
    Ok(respond_json(StatusCode::OK, product))
}
