use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Line item; only meaningful under its owning order. Keys stay snake_case on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

/// Element of the POST /orderitems body; each carries its own parent order id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewOrderItem {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

impl NewOrderItem {
    pub fn into_item(self, id: i64) -> OrderItem {
        OrderItem {
            id,
            order_id: self.order_id,
            product_id: self.product_id,
            quantity: self.quantity,
        }
    }
}
