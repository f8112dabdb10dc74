//! Order item accessors, including the transactional batch insert.

use crate::error::AppError;
use crate::models::{NewOrderItem, OrderItem};
use sqlx::{QueryBuilder, Sqlite, SqliteExecutor, SqlitePool};

const SELECT_ITEM: &str = "SELECT id, order_id, product_id, quantity FROM order_items";

/// SQLite accepts at most 32766 bind variables per statement.
const IN_CHUNK: usize = 10_000;

pub struct OrderItemService;

impl OrderItemService {
    pub async fn list_for_order<'e, E>(executor: E, order_id: i64) -> Result<Vec<OrderItem>, AppError>
    where
        E: SqliteExecutor<'e>,
    {
        let sql = format!("{} WHERE order_id = ? ORDER BY id", SELECT_ITEM);
        tracing::debug!(sql = %sql, order_id, "query");
        let rows = sqlx::query_as::<_, OrderItem>(&sql)
            .bind(order_id)
            .fetch_all(executor)
            .await?;
        Ok(rows)
    }

    /// Every item whose parent order exists, ordered by id. No bind variables, so it
    /// works for any number of orders.
    pub async fn list_all<'e, E>(executor: E) -> Result<Vec<OrderItem>, AppError>
    where
        E: SqliteExecutor<'e>,
    {
        let sql = format!("{} WHERE order_id IN (SELECT id FROM orders) ORDER BY id", SELECT_ITEM);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, OrderItem>(&sql).fetch_all(executor).await?;
        Ok(rows)
    }

    /// Items of the given orders (order_id IN (...)), ordered by id. Ids are sent in
    /// chunks of `IN_CHUNK` to stay under SQLite's bind variable limit.
    pub async fn list_for_orders(pool: &SqlitePool, order_ids: &[i64]) -> Result<Vec<OrderItem>, AppError> {
        let mut rows = Vec::new();
        for chunk in order_ids.chunks(IN_CHUNK) {
            let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_ITEM);
            qb.push(" WHERE order_id IN (");
            let mut ids = qb.separated(", ");
            for id in chunk {
                ids.push_bind(*id);
            }
            ids.push_unseparated(")");
            tracing::debug!(sql = %qb.sql(), count = chunk.len(), "query");
            rows.extend(qb.build_query_as::<OrderItem>().fetch_all(pool).await?);
        }
        rows.sort_by_key(|item| item.id);
        Ok(rows)
    }

    /// Insert one item and return it with the generated id.
    pub async fn create<'e, E>(executor: E, new: NewOrderItem) -> Result<OrderItem, AppError>
    where
        E: SqliteExecutor<'e>,
    {
        let sql = "INSERT INTO order_items (order_id, product_id, quantity) VALUES (?, ?, ?)";
        tracing::debug!(sql = %sql, order_id = new.order_id, product_id = new.product_id, "query");
        let done = sqlx::query(sql)
            .bind(new.order_id)
            .bind(new.product_id)
            .bind(new.quantity)
            .execute(executor)
            .await?;
        Ok(new.into_item(done.last_insert_rowid()))
    }

    /// Insert every item in one transaction. Any failure rolls back the whole batch.
    pub async fn create_batch(pool: &SqlitePool, items: Vec<NewOrderItem>) -> Result<Vec<OrderItem>, AppError> {
        if items.is_empty() {
            return Ok(Vec::new());
        }
        let mut tx = pool.begin().await?;
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            match Self::create(&mut *tx, item).await {
                Ok(created) => out.push(created),
                Err(e) => {
                    if let Err(rb) = tx.rollback().await {
                        tracing::warn!(error = %rb, "rollback failed");
                    }
                    return Err(e);
                }
            }
        }
        tx.commit().await?;
        Ok(out)
    }
}
