//! Row records and request payloads for products, orders and order items.

pub mod order;
pub mod order_item;
pub mod product;

pub use order::{NewOrder, NewOrderLine, Order};
pub use order_item::{NewOrderItem, OrderItem};
pub use product::{NewProduct, Product};
