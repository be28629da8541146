use sqlx::sqlite::{Sqlite, SqlitePool};
use sqlx::Transaction;
use tracing::info;

use super::new_id;
use crate::errors::{CmsError, CmsResult};
use crate::models::{
    AaaAuthor, AaaAuthorInput, AaaFunFact, AaaQuote, AaaQuoteInput, AuthorWithFacts, FunFactInput,
};
use crate::ordering::{dense_ranks, normalize_fun_facts};
use crate::validate;

// ====== QUOTES ======

/// List quotes in display order, optionally only the active ones.
pub async fn list_quotes(pool: &SqlitePool, active_only: bool) -> CmsResult<Vec<AaaQuote>> {
    let quotes = sqlx::query_as::<_, AaaQuote>(
        r#"
        SELECT * FROM aaa_quotes
        WHERE (? = 0 OR active = 1)
        ORDER BY order_rank ASC
        "#,
    )
    .bind(active_only)
    .fetch_all(pool)
    .await?;

    Ok(quotes)
}

/// Get a single quote by ID.
pub async fn get_quote(pool: &SqlitePool, id: &str) -> CmsResult<AaaQuote> {
    sqlx::query_as::<_, AaaQuote>("SELECT * FROM aaa_quotes WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| CmsError::not_found("Quote"))
}

/// Create a quote from the admin form.
pub async fn create_quote(pool: &SqlitePool, input: AaaQuoteInput) -> CmsResult<AaaQuote> {
    let input = validate::quote(input)?;
    let id = new_id();

    sqlx::query(
        "INSERT INTO aaa_quotes (id, quote, author_name, order_rank, active) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&input.quote)
    .bind(&input.author_name)
    .bind(input.order_rank)
    .bind(input.active)
    .execute(pool)
    .await?;

    get_quote(pool, &id).await
}

/// Overwrite a quote's text, author, rank and visibility.
pub async fn update_quote(pool: &SqlitePool, id: &str, input: AaaQuoteInput) -> CmsResult<AaaQuote> {
    let input = validate::quote(input)?;

    let result = sqlx::query(
        "UPDATE aaa_quotes SET quote = ?, author_name = ?, order_rank = ?, active = ? WHERE id = ?",
    )
    .bind(&input.quote)
    .bind(&input.author_name)
    .bind(input.order_rank)
    .bind(input.active)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(CmsError::not_found("Quote"));
    }

    get_quote(pool, id).await
}

/// Delete a quote.
pub async fn delete_quote(pool: &SqlitePool, id: &str) -> CmsResult<()> {
    let result = sqlx::query("DELETE FROM aaa_quotes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CmsError::not_found("Quote"));
    }
    Ok(())
}

/// Persist a new quote order: the listed ids take ranks 1, 2, ... in the
/// given order and any quote left out follows in its current order, so every
/// quote ends up with a dense rank. Runs in one transaction; an unknown id
/// rolls the whole save back.
pub async fn reorder_quotes(pool: &SqlitePool, ids: &[String]) -> CmsResult<()> {
    if ids.is_empty() {
        return Ok(());
    }
    dense_ranks(ids)?;

    let mut tx = pool.begin().await?;
    let current: Vec<(String,)> =
        sqlx::query_as("SELECT id FROM aaa_quotes ORDER BY order_rank ASC, rowid ASC")
            .fetch_all(&mut *tx)
            .await?;
    let current: Vec<String> = current.into_iter().map(|(id,)| id).collect();

    if let Some(missing) = ids.iter().find(|id| !current.contains(id)) {
        return Err(CmsError::NotFound(format!("Quote {}", missing)));
    }

    let full_order: Vec<String> = ids
        .iter()
        .cloned()
        .chain(current.into_iter().filter(|id| !ids.contains(id)))
        .collect();
    let ranks = dense_ranks(&full_order)?;

    for (id, rank) in &ranks {
        sqlx::query("UPDATE aaa_quotes SET order_rank = ? WHERE id = ?")
            .bind(rank)
            .bind(id)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    info!("Reordered {} quotes", ranks.len());
    Ok(())
}

// ====== AUTHORS ======

/// List hosts in display order, optionally only the featured ones.
pub async fn list_authors(pool: &SqlitePool, featured_only: bool) -> CmsResult<Vec<AaaAuthor>> {
    let authors = sqlx::query_as::<_, AaaAuthor>(
        r#"
        SELECT * FROM aaa_authors
        WHERE (? = 0 OR featured = 1)
        ORDER BY order_rank ASC
        "#,
    )
    .bind(featured_only)
    .fetch_all(pool)
    .await?;

    Ok(authors)
}

/// Get a single host by ID.
pub async fn get_author(pool: &SqlitePool, id: &str) -> CmsResult<AaaAuthor> {
    sqlx::query_as::<_, AaaAuthor>("SELECT * FROM aaa_authors WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| CmsError::not_found("Author"))
}

/// Host plus their fun facts in rank order.
pub async fn get_author_with_facts(pool: &SqlitePool, id: &str) -> CmsResult<AuthorWithFacts> {
    let author = get_author(pool, id).await?;
    let fun_facts = list_fun_facts(pool, id).await?;
    Ok(AuthorWithFacts { author, fun_facts })
}

/// Create a host and their fun facts in one transaction.
pub async fn create_author(
    pool: &SqlitePool,
    input: AaaAuthorInput,
    facts: Vec<FunFactInput>,
) -> CmsResult<AuthorWithFacts> {
    let input = validate::author(input)?;
    let id = new_id();

    let mut tx = pool.begin().await?;
    sqlx::query(
        r#"
        INSERT INTO aaa_authors (id, slug, name, full_name, role, color_bg, color_text,
            color_border, color_shadow, bio, profile_image_url, profile_image_alt,
            order_rank, featured)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&input.slug)
    .bind(&input.name)
    .bind(&input.full_name)
    .bind(&input.role)
    .bind(&input.color_bg)
    .bind(&input.color_text)
    .bind(&input.color_border)
    .bind(&input.color_shadow)
    .bind(&input.bio)
    .bind(&input.profile_image_url)
    .bind(&input.profile_image_alt)
    .bind(input.order_rank)
    .bind(input.featured)
    .execute(&mut *tx)
    .await?;

    write_fun_facts(&mut tx, &id, facts).await?;
    tx.commit().await?;

    get_author_with_facts(pool, &id).await
}

/// Overwrite a host's columns and replace their fun facts in one transaction.
pub async fn update_author(
    pool: &SqlitePool,
    id: &str,
    input: AaaAuthorInput,
    facts: Vec<FunFactInput>,
) -> CmsResult<AuthorWithFacts> {
    let input = validate::author(input)?;

    let mut tx = pool.begin().await?;
    let result = sqlx::query(
        r#"
        UPDATE aaa_authors SET slug = ?, name = ?, full_name = ?, role = ?, color_bg = ?,
            color_text = ?, color_border = ?, color_shadow = ?, bio = ?, profile_image_url = ?,
            profile_image_alt = ?, order_rank = ?, featured = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.slug)
    .bind(&input.name)
    .bind(&input.full_name)
    .bind(&input.role)
    .bind(&input.color_bg)
    .bind(&input.color_text)
    .bind(&input.color_border)
    .bind(&input.color_shadow)
    .bind(&input.bio)
    .bind(&input.profile_image_url)
    .bind(&input.profile_image_alt)
    .bind(input.order_rank)
    .bind(input.featured)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(CmsError::not_found("Author"));
    }

    write_fun_facts(&mut tx, id, facts).await?;
    tx.commit().await?;

    get_author_with_facts(pool, id).await
}

/// Delete a host; their fun facts go with them.
pub async fn delete_author(pool: &SqlitePool, id: &str) -> CmsResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM aaa_fun_facts WHERE author_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM aaa_authors WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CmsError::not_found("Author"));
    }

    tx.commit().await?;
    Ok(())
}

// ====== FUN FACTS ======

/// Fun facts of one host in rank order.
pub async fn list_fun_facts(pool: &SqlitePool, author_id: &str) -> CmsResult<Vec<AaaFunFact>> {
    let facts = sqlx::query_as::<_, AaaFunFact>(
        "SELECT * FROM aaa_fun_facts WHERE author_id = ? ORDER BY order_rank ASC",
    )
    .bind(author_id)
    .fetch_all(pool)
    .await?;

    Ok(facts)
}

/// Fun facts for several hosts at once, in rank order.
pub async fn list_fun_facts_for(
    pool: &SqlitePool,
    author_ids: &[String],
) -> CmsResult<Vec<AaaFunFact>> {
    if author_ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; author_ids.len()].join(", ");
    let sql = format!(
        "SELECT * FROM aaa_fun_facts WHERE author_id IN ({}) ORDER BY author_id, order_rank ASC",
        placeholders
    );

    let mut query = sqlx::query_as::<_, AaaFunFact>(&sql);
    for id in author_ids {
        query = query.bind(id);
    }

    Ok(query.fetch_all(pool).await?)
}

/// Replace a host's fun facts wholesale.
pub async fn replace_fun_facts(
    pool: &SqlitePool,
    author_id: &str,
    facts: Vec<FunFactInput>,
) -> CmsResult<Vec<AaaFunFact>> {
    // Confirm the host exists so a typo cannot leave orphaned facts.
    get_author(pool, author_id).await?;

    let mut tx = pool.begin().await?;
    write_fun_facts(&mut tx, author_id, facts).await?;
    tx.commit().await?;

    list_fun_facts(pool, author_id).await
}

/// Delete every fact of the host and reinsert the cleaned list with ranks 1..N.
async fn write_fun_facts(
    tx: &mut Transaction<'_, Sqlite>,
    author_id: &str,
    facts: Vec<FunFactInput>,
) -> CmsResult<()> {
    sqlx::query("DELETE FROM aaa_fun_facts WHERE author_id = ?")
        .bind(author_id)
        .execute(&mut **tx)
        .await?;

    for (fact, rank) in normalize_fun_facts(facts) {
        sqlx::query(
            "INSERT INTO aaa_fun_facts (id, author_id, fact, order_rank) VALUES (?, ?, ?, ?)",
        )
        .bind(new_id())
        .bind(author_id)
        .bind(&fact)
        .bind(rank)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}
