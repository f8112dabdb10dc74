//! Server: loads `.env` and config from the environment, opens the SQLite store,
//! ensures tables exist, and serves the shop and common routes.

use shopfront::{app_router, config, connect, ensure_tables, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shopfront=info,tower_http=info")),
        )
        .init();

    let config = config::from_env()?;
    let pool = connect(&config).await?;
    ensure_tables(&pool).await?;

    let app = app_router(AppState::new(pool), &config);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
