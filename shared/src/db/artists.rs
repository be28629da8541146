use sqlx::sqlite::SqlitePool;

use super::new_id;
use crate::errors::{CmsError, CmsResult};
use crate::models::{Artist, ArtistInput};
use crate::validate;

/// List artists by their display rank.
pub async fn list_artists(pool: &SqlitePool, limit: Option<i64>) -> CmsResult<Vec<Artist>> {
    let artists = sqlx::query_as::<_, Artist>(
        "SELECT * FROM artists ORDER BY order_rank ASC, name ASC LIMIT ?",
    )
    .bind(limit.unwrap_or(-1))
    .fetch_all(pool)
    .await?;

    Ok(artists)
}

pub async fn get_artist(pool: &SqlitePool, id: &str) -> CmsResult<Artist> {
    sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| CmsError::not_found("Artist"))
}

pub async fn get_artist_by_slug(pool: &SqlitePool, slug: &str) -> CmsResult<Artist> {
    sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE slug = ?")
        .bind(slug)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| CmsError::not_found("Artist"))
}

pub async fn create_artist(pool: &SqlitePool, input: ArtistInput) -> CmsResult<Artist> {
    let input = validate::artist(input)?;
    let id = new_id();

    sqlx::query(
        r#"
        INSERT INTO artists (id, name, slug, short_description, profile_image_url,
            profile_image_alt, genre, featured, order_rank)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&input.name)
    .bind(&input.slug)
    .bind(&input.short_description)
    .bind(&input.profile_image_url)
    .bind(&input.profile_image_alt)
    .bind(&input.genre)
    .bind(input.featured)
    .bind(input.order_rank)
    .execute(pool)
    .await?;

    get_artist(pool, &id).await
}

pub async fn update_artist(pool: &SqlitePool, id: &str, input: ArtistInput) -> CmsResult<Artist> {
    let input = validate::artist(input)?;

    let result = sqlx::query(
        r#"
        UPDATE artists SET name = ?, slug = ?, short_description = ?, profile_image_url = ?,
            profile_image_alt = ?, genre = ?, featured = ?, order_rank = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.name)
    .bind(&input.slug)
    .bind(&input.short_description)
    .bind(&input.profile_image_url)
    .bind(&input.profile_image_alt)
    .bind(&input.genre)
    .bind(input.featured)
    .bind(input.order_rank)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(CmsError::not_found("Artist"));
    }

    get_artist(pool, id).await
}

pub async fn delete_artist(pool: &SqlitePool, id: &str) -> CmsResult<()> {
    let result = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CmsError::not_found("Artist"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    fn input(name: &str, rank: i64) -> ArtistInput {
        ArtistInput {
            name: name.to_string(),
            order_rank: rank,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_listed_by_rank() {
        let pool = create_memory_pool().await.unwrap();
        create_artist(&pool, input("Tayc", 2)).await.unwrap();
        create_artist(&pool, input("Manu Dibango", 1)).await.unwrap();
        create_artist(&pool, input("Charlotte Dipanda", 3)).await.unwrap();

        let names: Vec<_> = list_artists(&pool, Some(2))
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["Manu Dibango", "Tayc"]);
    }

    #[tokio::test]
    async fn test_explicit_slug_kept() {
        let pool = create_memory_pool().await.unwrap();
        let artist = create_artist(
            &pool,
            ArtistInput {
                name: "James BKS".into(),
                slug: "james-bks".into(),
                genre: Some("Afro-electro".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let fetched = get_artist_by_slug(&pool, "james-bks").await.unwrap();
        assert_eq!(fetched.id, artist.id);
        assert_eq!(fetched.genre.as_deref(), Some("Afro-electro"));
    }

    #[tokio::test]
    async fn test_missing_artist() {
        let pool = create_memory_pool().await.unwrap();
        assert!(matches!(get_artist(&pool, "nope").await, Err(CmsError::NotFound(_))));
        assert!(matches!(delete_artist(&pool, "nope").await, Err(CmsError::NotFound(_))));
    }
}
