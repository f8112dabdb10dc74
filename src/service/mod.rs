//! Storage accessors: fixed SQL per entity, rows mapped to records.

mod order;
mod order_item;
mod product;

pub use order::OrderService;
pub use order_item::OrderItemService;
pub use product::ProductService;
