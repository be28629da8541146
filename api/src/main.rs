/// Fireside API Server
///
/// Serves the public content API, the admin CMS endpoints, and static files.
use std::sync::Arc;
use tracing::info;

use fireside_api::config::Config;
use fireside_api::{build_router, AppState};
use fireside_shared::db;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fireside_api=info,tower_http=info".into()),
        )
        .init();

    // Config
    let config = Config::from_env()?;
    let database_url = config.database_url();
    info!("Database: {}", database_url);

    // Database
    let pool = db::create_pool(&database_url).await?;
    db::run_migrations(&pool).await?;

    let api_host = config.api_host.clone();
    let api_port = config.api_port;
    let cleanup_interval = config.cleanup_interval;

    // App state
    let state = Arc::new(AppState::new(pool.clone(), config));

    // Background session cleanup
    let cleanup_pool = pool.clone();
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(tokio::time::Duration::from_secs(cleanup_interval));
        loop {
            interval.tick().await;
            match db::cleanup_expired_sessions(&cleanup_pool).await {
                Ok(n) if n > 0 => info!("Cleaned up {} expired sessions", n),
                Err(e) => tracing::warn!("Session cleanup error: {}", e),
                _ => {}
            }
        }
    });

    let app = build_router(state);

    // Bind
    let addr = format!("{}:{}", api_host, api_port);
    info!("Fireside API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
