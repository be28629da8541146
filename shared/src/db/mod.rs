/// Database connection pool and repositories for Fireside content.
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

use crate::errors::CmsResult;

mod aaa;
mod artists;
mod blog;
mod episodes;
mod pages;
mod sessions;

pub use aaa::*;
pub use artists::*;
pub use blog::*;
pub use episodes::*;
pub use pages::*;
pub use sessions::*;

/// SQLite URL for a database file path, created on first connect.
pub fn sqlite_url(database_path: &str) -> String {
    let path = std::path::Path::new(database_path)
        .canonicalize()
        .unwrap_or_else(|_| std::path::PathBuf::from(database_path));
    // Strip Windows UNC prefix (\\?\) which breaks SQLite URL parsing
    let path = path.display().to_string();
    let path = path.strip_prefix(r"\\?\").unwrap_or(&path).to_string();
    format!("sqlite://{}?mode=rwc", path)
}

/// Create SQLite connection pool with WAL mode and busy timeout.
pub async fn create_pool(database_url: &str) -> CmsResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(10))
        .foreign_keys(true)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    info!("Connected to database: {}", database_url);
    Ok(pool)
}

/// Single-connection in-memory database with the schema applied.
pub async fn create_memory_pool() -> CmsResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Run migrations from the migrations directory.
pub async fn run_migrations(pool: &SqlitePool) -> CmsResult<()> {
    sqlx::migrate!("../migrations").run(pool).await?;

    info!("Database migrations completed");
    Ok(())
}

/// Fresh primary key for a new row.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current time as stored in `updated_at` columns.
pub(crate) fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_url_for_missing_file() {
        assert_eq!(
            sqlite_url("./not-created-yet.db"),
            "sqlite://./not-created-yet.db?mode=rwc"
        );
    }
}
