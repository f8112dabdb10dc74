//! Product accessors.

use crate::error::AppError;
use crate::models::{NewProduct, Product};
use sqlx::SqliteExecutor;

const SELECT_PRODUCT: &str = "SELECT id, product_code, name, inventory, price, status FROM products";

pub struct ProductService;

impl ProductService {
    /// All products in insertion order.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Product>, AppError>
    where
        E: SqliteExecutor<'e>,
    {
        let sql = format!("{} ORDER BY id", SELECT_PRODUCT);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(executor).await?;
        Ok(rows)
    }

    pub async fn get_by_id<'e, E>(executor: E, id: i64) -> Result<Product, AppError>
    where
        E: SqliteExecutor<'e>,
    {
        let sql = format!("{} WHERE id = ?", SELECT_PRODUCT);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("product {}", id)))
    }

    /// Insert one row and return it with the generated id.
    pub async fn create<'e, E>(executor: E, new: NewProduct) -> Result<Product, AppError>
    where
        E: SqliteExecutor<'e>,
    {
        let sql = "INSERT INTO products (product_code, name, inventory, price, status) VALUES (?, ?, ?, ?, ?)";
        tracing::debug!(sql = %sql, "query");
        let done = sqlx::query(sql)
            .bind(&new.product_code)
            .bind(&new.name)
            .bind(new.inventory)
            .bind(new.price)
            .bind(&new.status)
            .execute(executor)
            .await?;
        Ok(new.into_product(done.last_insert_rowid()))
    }
}
