//! Order accessors. Reads attach items with a second query; creation with items
//! runs as one unit of work.

use crate::error::AppError;
use crate::models::{NewOrder, Order, OrderItem};
use crate::service::OrderItemService;
use sqlx::{SqliteConnection, SqliteExecutor, SqlitePool};
use std::collections::HashMap;

const SELECT_ORDER: &str = "SELECT id, customer_name, total, status FROM orders";

pub struct OrderService;

impl OrderService {
    /// All orders in insertion order, each with its items.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Order>, AppError> {
        let sql = format!("{} ORDER BY id", SELECT_ORDER);
        tracing::debug!(sql = %sql, "query");
        let mut orders = sqlx::query_as::<_, Order>(&sql).fetch_all(pool).await?;

        let mut by_order: HashMap<i64, Vec<OrderItem>> = HashMap::new();
        for item in OrderItemService::list_all(pool).await? {
            by_order.entry(item.order_id).or_default().push(item);
        }
        for order in &mut orders {
            order.items = by_order.remove(&order.id).unwrap_or_default();
        }
        Ok(orders)
    }

    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Order, AppError> {
        let sql = format!("{} WHERE id = ?", SELECT_ORDER);
        tracing::debug!(sql = %sql, id, "query");
        let mut order = sqlx::query_as::<_, Order>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("order {}", id)))?;
        order.items = OrderItemService::list_for_order(pool, id).await?;
        Ok(order)
    }

    /// Insert the order row only; `new.items` is ignored and the result has no items.
    pub async fn create<'e, E>(executor: E, new: &NewOrder) -> Result<Order, AppError>
    where
        E: SqliteExecutor<'e>,
    {
        let sql = "INSERT INTO orders (customer_name, total, status) VALUES (?, ?, ?)";
        tracing::debug!(sql = %sql, "query");
        let done = sqlx::query(sql)
            .bind(&new.customer_name)
            .bind(new.total)
            .bind(&new.status)
            .execute(executor)
            .await?;
        Ok(Order {
            id: done.last_insert_rowid(),
            customer_name: new.customer_name.clone(),
            total: new.total,
            status: new.status.clone(),
            items: Vec::new(),
        })
    }

    /// Insert the order and all of its items in one transaction. Nothing is
    /// persisted unless every insert succeeds.
    pub async fn create_with_items(pool: &SqlitePool, new: NewOrder) -> Result<Order, AppError> {
        let mut tx = pool.begin().await?;
        match Self::insert_with_items(&mut *tx, &new).await {
            Ok(order) => {
                tx.commit().await?;
                tracing::info!(order_id = order.id, items = order.items.len(), "order created");
                Ok(order)
            }
            Err(e) => {
                if let Err(rb) = tx.rollback().await {
                    tracing::warn!(error = %rb, "rollback failed");
                }
                Err(e)
            }
        }
    }

    async fn insert_with_items(conn: &mut SqliteConnection, new: &NewOrder) -> Result<Order, AppError> {
        let mut order = Self::create(&mut *conn, new).await?;
        for line in &new.items {
            let item = OrderItemService::create(&mut *conn, line.for_order(order.id)).await?;
            order.items.push(item);
        }
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewOrderLine;
    use crate::store::connect_in_memory;

    async fn seed_products(pool: &SqlitePool, n: usize) {
        for i in 0..n {
            sqlx::query("INSERT INTO products (product_code, name) VALUES (?, ?)")
                .bind(format!("P{}", i))
                .bind("thing")
                .execute(pool)
                .await
                .unwrap();
        }
    }

    fn order_with(lines: &[(i64, i64)]) -> NewOrder {
        NewOrder {
            customer_name: "DaisyDuck".into(),
            total: 30.0,
            status: "Shipped".into(),
            items: lines
                .iter()
                .map(|&(product_id, quantity)| NewOrderLine { product_id, quantity })
                .collect(),
        }
    }

    async fn count(pool: &SqlitePool, table: &str) -> i64 {
        let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(pool)
            .await
            .unwrap();
        n
    }

    #[tokio::test]
    async fn creates_k_items_under_new_order() {
        let pool = connect_in_memory().await.unwrap();
        seed_products(&pool, 2).await;
        let order = OrderService::create_with_items(&pool, order_with(&[(1, 1), (2, 3), (1, 4)]))
            .await
            .unwrap();
        assert_eq!(order.items.len(), 3);
        assert!(order.items.iter().all(|i| i.order_id == order.id));

        let fetched = OrderService::get_by_id(&pool, order.id).await.unwrap();
        assert_eq!(fetched, order);
        assert_eq!(count(&pool, "order_items").await, 3);
    }

    #[tokio::test]
    async fn failed_item_rolls_back_everything() {
        let pool = connect_in_memory().await.unwrap();
        seed_products(&pool, 1).await;
        let err = OrderService::create_with_items(&pool, order_with(&[(1, 1), (1, 2), (404, 1)]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Db(_)));
        assert_eq!(count(&pool, "orders").await, 0);
        assert_eq!(count(&pool, "order_items").await, 0);
    }

    #[tokio::test]
    async fn list_attaches_each_orders_items() {
        let pool = connect_in_memory().await.unwrap();
        seed_products(&pool, 2).await;
        let a = OrderService::create_with_items(&pool, order_with(&[(1, 1)])).await.unwrap();
        let b = OrderService::create_with_items(&pool, order_with(&[])).await.unwrap();
        let c = OrderService::create_with_items(&pool, order_with(&[(2, 2), (1, 5)])).await.unwrap();

        let listed = OrderService::list(&pool).await.unwrap();
        assert_eq!(listed, vec![a, b, c]);
    }

    #[tokio::test]
    async fn list_handles_more_orders_than_bind_variables() {
        let pool = connect_in_memory().await.unwrap();
        seed_products(&pool, 1).await;
        sqlx::query(
            "WITH RECURSIVE seq(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < 33000) \
             INSERT INTO orders (customer_name, total, status) SELECT 'bulk', 0, 'New' FROM seq",
        )
        .execute(&pool)
        .await
        .unwrap();
        let last = OrderService::create_with_items(&pool, order_with(&[(1, 2)])).await.unwrap();

        let listed = OrderService::list(&pool).await.unwrap();
        assert_eq!(listed.len(), 33001);
        assert!(listed[..33000].iter().all(|o| o.items.is_empty()));
        assert_eq!(listed.last(), Some(&last));
    }

    #[tokio::test]
    async fn missing_order_is_not_found() {
        let pool = connect_in_memory().await.unwrap();
        let err = OrderService::get_by_id(&pool, 3).await.unwrap_err();
        assert_eq!(err.to_string(), "not found: order 3");
    }
}
