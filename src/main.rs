//! userhub - user-management HTTP service with a Redis-backed cache facade

mod api;
mod cache;
mod config;
mod error;
mod models;
mod users;

use std::net::SocketAddr;

use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use cache::CacheService;
use config::Config;
use users::UserRepository;

/// Main entry point.
///
/// # Startup Sequence
/// 1. Load `.env` and initialize the tracing subscriber
/// 2. Load and validate configuration (any missing/invalid value aborts)
/// 3. Connect the shared Redis client and the Postgres pool
/// 4. Run pending database migrations
/// 5. Create the Axum router with all endpoints
/// 6. Serve until SIGINT/SIGTERM, then close the pool
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userhub=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    info!(
        app = %config.app_name,
        env = %config.node_env,
        port = config.port,
        "Configuration loaded"
    );

    // Single shared Redis connection, reused by all requests.
    let redis_conn = cache::connect(&config.redis).await?;
    let cache = CacheService::new(redis_conn);

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database.url())
        .await?;
    info!("Postgres connection pool established");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let state = AppState::new(cache, UserRepository::new(pool.clone()));
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Explicit shutdown hook for the shared clients; the Redis connection
    // manager closes when its last clone drops.
    pool.close().await;
    info!("Server shutdown complete");

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
