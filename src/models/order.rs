use crate::models::order_item::{NewOrderItem, OrderItem};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub total: f64,
    pub status: String,
    /// Filled by a second query; not a column.
    #[sqlx(skip)]
    pub items: Vec<OrderItem>,
}

/// POST /orders body. Items get the new order's id once it is inserted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewOrder {
    pub customer_name: String,
    pub total: f64,
    pub status: String,
    pub items: Vec<NewOrderLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewOrderLine {
    pub product_id: i64,
    pub quantity: i64,
}

impl NewOrderLine {
    pub fn for_order(&self, order_id: i64) -> NewOrderItem {
        NewOrderItem {
            order_id,
            product_id: self.product_id,
            quantity: self.quantity,
        }
    }
}
