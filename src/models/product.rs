use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub product_code: String,
    pub name: String,
    pub inventory: i64,
    pub price: f64,
    pub status: String,
}

/// POST /products body. Fields left out of the JSON default to zero values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProduct {
    pub product_code: String,
    pub name: String,
    pub inventory: i64,
    pub price: f64,
    pub status: String,
}

impl NewProduct {
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            product_code: self.product_code,
            name: self.name,
            inventory: self.inventory,
            price: self.price,
            status: self.status,
        }
    }
}
