use sqlx::sqlite::SqlitePool;

use crate::errors::CmsResult;

/// Record an admin session (token valid for `ttl_secs`).
pub async fn create_session(
    pool: &SqlitePool,
    token: &str,
    subject: &str,
    ttl_secs: i64,
) -> CmsResult<()> {
    sqlx::query(
        r#"
        INSERT INTO sessions (token, subject, expires_at)
        VALUES (?, ?, datetime('now', ?))
        "#,
    )
    .bind(token)
    .bind(subject)
    .bind(format!("{:+} seconds", ttl_secs))
    .execute(pool)
    .await?;

    Ok(())
}

/// Validate a session token. Returns the subject if valid and not expired.
pub async fn validate_session(pool: &SqlitePool, token: &str) -> CmsResult<Option<String>> {
    let row: Option<(String,)> = sqlx::query_as(
        r#"
        SELECT subject FROM sessions
        WHERE token = ? AND expires_at > datetime('now')
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.0))
}

/// Delete a session (logout).
pub async fn delete_session(pool: &SqlitePool, token: &str) -> CmsResult<()> {
    sqlx::query("DELETE FROM sessions WHERE token = ?")
        .bind(token)
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete all expired sessions.
pub async fn cleanup_expired_sessions(pool: &SqlitePool) -> CmsResult<u64> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= datetime('now')")
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
