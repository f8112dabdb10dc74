//! Shopfront: products and orders over SQLite, served as JSON over HTTP.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use response::{respond_error, respond_json};
pub use routes::{app_router, common_routes, shop_routes};
pub use service::{OrderItemService, OrderService, ProductService};
pub use state::AppState;
pub use store::{connect, connect_in_memory, ensure_tables};
