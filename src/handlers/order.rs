//! Order handlers: list, fetch by id, create with items, and the order-item batch.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::handlers::parse_id;
use crate::models::{NewOrder, NewOrderItem};
use crate::response::respond_json;
use crate::service::{OrderItemService, OrderService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

pub async fn list_orders(State(state): State<AppState>) -> Result<Response, AppError> {
    let orders = OrderService::list(&state.pool).await?;
    Ok(respond_json(StatusCode::OK, orders))
}

pub async fn fetch_order(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id_str)?;
    let order = OrderService::get_by_id(&state.pool, id).await?;
    Ok(respond_json(StatusCode::OK, order))
}

pub async fn create_order(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewOrder>,
) -> Result<Response, AppError> {
    let order = OrderService::create_with_items(&state.pool, body).await?;
    Ok(respond_json(StatusCode::OK, order))
}

pub async fn create_order_items(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Vec<NewOrderItem>>,
) -> Result<Response, AppError> {
    let items = OrderItemService::create_batch(&state.pool, body).await?;
    tracing::info!(count = items.len(), "order items created");
    Ok(respond_json(StatusCode::OK, items))
}
