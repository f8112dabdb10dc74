//! SQLite pool setup and table bootstrap for products, orders and order_items.

use crate::config::ServerConfig;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        product_code TEXT NOT NULL DEFAULT '',
        name TEXT NOT NULL DEFAULT '',
        inventory INTEGER NOT NULL DEFAULT 0,
        price REAL NOT NULL DEFAULT 0,
        status TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        customer_name TEXT NOT NULL DEFAULT '',
        total REAL NOT NULL DEFAULT 0,
        status TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS order_items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        order_id INTEGER NOT NULL REFERENCES orders (id),
        product_id INTEGER NOT NULL REFERENCES products (id),
        quantity INTEGER NOT NULL DEFAULT 0
    )
    "#,
    "CREATE INDEX IF NOT EXISTS order_items_order_id ON order_items (order_id)",
];

/// Open the pool described by `config`, creating the database file if missing.
/// Foreign keys are enforced on every connection.
pub async fn connect(config: &ServerConfig) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;
    tracing::info!(url = %config.database_url, "database connected");
    Ok(pool)
}

/// Single-connection in-memory pool with tables created. Every connection to
/// `sqlite::memory:` is its own database, so the pool never opens a second one
/// nor retires the first.
pub async fn connect_in_memory() -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    ensure_tables(&pool).await?;
    Ok(pool)
}

/// Create the entity tables if they do not exist. Existing tables are left untouched.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in TABLES {
        sqlx::query(*ddl).execute(pool).await?;
    }
    tracing::debug!(tables = TABLES.len(), "tables ensured");
    Ok(())
}
