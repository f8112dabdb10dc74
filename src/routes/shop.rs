//! Product and order routes.

use crate::handlers::{
    create_order, create_order_items, create_product, fetch_order, fetch_product, list_orders,
    list_products,
};
use crate::routes::method_not_allowed;
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn shop_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/products",
            get(list_products).post(create_product).fallback(method_not_allowed),
        )
        .route("/product/:id", get(fetch_product).fallback(method_not_allowed))
        .route(
            "/orders",
            get(list_orders).post(create_order).fallback(method_not_allowed),
        )
        .route("/order/:id", get(fetch_order).fallback(method_not_allowed))
        .route("/orderitems", post(create_order_items).fallback(method_not_allowed))
        .with_state(state)
}
