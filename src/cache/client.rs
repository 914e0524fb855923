//! Redis Client Adapter
//!
//! Thin binding to the external store: builds the connection from
//! host/port/password/db-index configuration and hands back a single
//! shared multiplexed connection, created once at process start.

use redis::aio::ConnectionManager;
use redis::Client;
use tracing::info;

use crate::config::RedisConfig;
use crate::error::Result;

/// Connects to Redis and returns the shared connection manager.
///
/// The manager multiplexes all requests over one long-lived connection and
/// reconnects on failure; no pooling or retry logic is added on top.
pub async fn connect(config: &RedisConfig) -> Result<ConnectionManager> {
    let client = Client::open(config.url())?;
    let conn = ConnectionManager::new(client).await?;

    info!(
        host = %config.host,
        port = config.port,
        db = config.db,
        "Redis connected successfully"
    );

    Ok(conn)
}
