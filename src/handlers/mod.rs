//! HTTP handlers for products, orders and order items.

pub mod order;
pub mod product;
pub use order::*;
pub use product::*;

use crate::error::AppError;

/// Path ids are integers; anything else is a 400.
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}
