//! Server configuration: where to listen, which database, pool and body limits.

mod loader;

pub use loader::{from_env, from_lookup};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://practiceit.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9003";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    /// Request bodies larger than this are rejected with 413.
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}
