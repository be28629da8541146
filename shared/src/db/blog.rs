use sqlx::sqlite::SqlitePool;

use super::new_id;
use crate::errors::{CmsError, CmsResult};
use crate::models::{BlogPost, BlogPostInput};
use crate::validate;

/// List blog posts, newest first.
pub async fn list_blog_posts(pool: &SqlitePool, limit: Option<i64>) -> CmsResult<Vec<BlogPost>> {
    let posts = sqlx::query_as::<_, BlogPost>(
        r#"
        SELECT * FROM blog_posts
        ORDER BY published_at IS NULL, published_at DESC, created_at DESC
        LIMIT ?
        "#,
    )
    .bind(limit.unwrap_or(-1))
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

pub async fn get_blog_post(pool: &SqlitePool, id: &str) -> CmsResult<BlogPost> {
    sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| CmsError::not_found("Blog post"))
}

pub async fn get_blog_post_by_slug(pool: &SqlitePool, slug: &str) -> CmsResult<BlogPost> {
    sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE slug = ?")
        .bind(slug)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| CmsError::not_found("Blog post"))
}

pub async fn create_blog_post(pool: &SqlitePool, input: BlogPostInput) -> CmsResult<BlogPost> {
    let input = validate::blog_post(input)?;
    let id = new_id();

    sqlx::query(
        r#"
        INSERT INTO blog_posts (id, title, slug, excerpt, author, content, published_at,
            featured_image_url, featured_image_alt, featured)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&input.title)
    .bind(&input.slug)
    .bind(&input.excerpt)
    .bind(&input.author)
    .bind(&input.content)
    .bind(&input.published_at)
    .bind(&input.featured_image_url)
    .bind(&input.featured_image_alt)
    .bind(input.featured)
    .execute(pool)
    .await?;

    get_blog_post(pool, &id).await
}

pub async fn update_blog_post(
    pool: &SqlitePool,
    id: &str,
    input: BlogPostInput,
) -> CmsResult<BlogPost> {
    let input = validate::blog_post(input)?;

    let result = sqlx::query(
        r#"
        UPDATE blog_posts SET title = ?, slug = ?, excerpt = ?, author = ?, content = ?,
            published_at = ?, featured_image_url = ?, featured_image_alt = ?, featured = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.title)
    .bind(&input.slug)
    .bind(&input.excerpt)
    .bind(&input.author)
    .bind(&input.content)
    .bind(&input.published_at)
    .bind(&input.featured_image_url)
    .bind(&input.featured_image_alt)
    .bind(input.featured)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(CmsError::not_found("Blog post"));
    }

    get_blog_post(pool, id).await
}

pub async fn delete_blog_post(pool: &SqlitePool, id: &str) -> CmsResult<()> {
    let result = sqlx::query("DELETE FROM blog_posts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CmsError::not_found("Blog post"));
    }
    Ok(())
}
