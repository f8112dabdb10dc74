//! Load server config from environment variables (after `.env`, if the caller loaded one).

use crate::config::ServerConfig;
use crate::error::ConfigError;
use std::str::FromStr;

/// Read config from the process environment. Unset variables keep their defaults.
pub fn from_env() -> Result<ServerConfig, ConfigError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Build config from an arbitrary key lookup. Empty values count as unset.
pub fn from_lookup<F>(lookup: F) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let defaults = ServerConfig::default();

    Ok(ServerConfig {
        database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
        bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
        max_connections: parse("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), defaults.max_connections)?,
        body_limit: parse("BODY_LIMIT_BYTES", get("BODY_LIMIT_BYTES"), defaults.body_limit)?,
    })
}

fn parse<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { key, value }),
    }
}
