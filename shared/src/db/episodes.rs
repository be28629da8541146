use sqlx::sqlite::SqlitePool;
use std::collections::HashSet;

use super::new_id;
use crate::errors::{CmsError, CmsResult};
use crate::models::{Episode, EpisodeInput, NewSyncedEpisode};
use crate::validate;

/// List episodes, newest first.
pub async fn list_episodes(pool: &SqlitePool, limit: Option<i64>) -> CmsResult<Vec<Episode>> {
    let episodes = sqlx::query_as::<_, Episode>(
        r#"
        SELECT * FROM episodes
        ORDER BY published_at IS NULL, published_at DESC, created_at DESC
        LIMIT ?
        "#,
    )
    .bind(limit.unwrap_or(-1))
    .fetch_all(pool)
    .await?;

    Ok(episodes)
}

/// Get a single episode by ID.
pub async fn get_episode(pool: &SqlitePool, id: &str) -> CmsResult<Episode> {
    sqlx::query_as::<_, Episode>("SELECT * FROM episodes WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| CmsError::not_found("Episode"))
}

/// Get a single episode by slug.
pub async fn get_episode_by_slug(pool: &SqlitePool, slug: &str) -> CmsResult<Episode> {
    sqlx::query_as::<_, Episode>("SELECT * FROM episodes WHERE slug = ?")
        .bind(slug)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| CmsError::not_found("Episode"))
}

/// Create an episode from the admin form.
pub async fn create_episode(pool: &SqlitePool, input: EpisodeInput) -> CmsResult<Episode> {
    let input = validate::episode(input)?;
    let id = new_id();

    sqlx::query(
        r#"
        INSERT INTO episodes (id, title, slug, description, published_at, cover_image_url,
            cover_image_alt, spotify_url, youtube_url, featured)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&input.title)
    .bind(&input.slug)
    .bind(&input.description)
    .bind(&input.published_at)
    .bind(&input.cover_image_url)
    .bind(&input.cover_image_alt)
    .bind(&input.spotify_url)
    .bind(&input.youtube_url)
    .bind(input.featured)
    .execute(pool)
    .await?;

    get_episode(pool, &id).await
}

/// Overwrite the editable columns of an episode.
pub async fn update_episode(
    pool: &SqlitePool,
    id: &str,
    input: EpisodeInput,
) -> CmsResult<Episode> {
    let input = validate::episode(input)?;

    let result = sqlx::query(
        r#"
        UPDATE episodes SET title = ?, slug = ?, description = ?, published_at = ?,
            cover_image_url = ?, cover_image_alt = ?, spotify_url = ?, youtube_url = ?,
            featured = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.title)
    .bind(&input.slug)
    .bind(&input.description)
    .bind(&input.published_at)
    .bind(&input.cover_image_url)
    .bind(&input.cover_image_alt)
    .bind(&input.spotify_url)
    .bind(&input.youtube_url)
    .bind(input.featured)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(CmsError::not_found("Episode"));
    }

    get_episode(pool, id).await
}

/// Delete an episode.
pub async fn delete_episode(pool: &SqlitePool, id: &str) -> CmsResult<()> {
    let result = sqlx::query("DELETE FROM episodes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CmsError::not_found("Episode"));
    }
    Ok(())
}

/// All slugs currently in use (for the channel sync).
pub async fn episode_slugs(pool: &SqlitePool) -> CmsResult<HashSet<String>> {
    let rows: Vec<(String,)> = sqlx::query_as("SELECT slug FROM episodes")
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|(slug,)| slug).collect())
}

/// Insert a batch of synced episodes atomically. Returns the inserted count.
pub async fn insert_synced_episodes(
    pool: &SqlitePool,
    episodes: &[NewSyncedEpisode],
) -> CmsResult<u64> {
    let mut tx = pool.begin().await?;

    for episode in episodes {
        sqlx::query(
            r#"
            INSERT INTO episodes (id, title, slug, description, published_at, cover_image_url,
                cover_image_alt, spotify_url, youtube_url, featured, auto_synced)
            VALUES (?, ?, ?, ?, ?, ?, ?, NULL, ?, 0, 1)
            "#,
        )
        .bind(new_id())
        .bind(&episode.title)
        .bind(&episode.slug)
        .bind(&episode.description)
        .bind(&episode.published_at)
        .bind(&episode.cover_image_url)
        .bind(&episode.cover_image_alt)
        .bind(&episode.youtube_url)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(episodes.len() as u64)
}
