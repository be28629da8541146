use sqlx::sqlite::SqlitePool;

use super::now_rfc3339;
use crate::errors::{CmsError, CmsResult};
use crate::models::{
    AaaPageSettings, AaaSettingsInput, AboutPage, AboutPageInput, AAA_SETTINGS_ID, ABOUT_PAGE_ID,
};

/// Load the about page row, if it has ever been saved.
pub async fn get_about_page(pool: &SqlitePool) -> CmsResult<Option<AboutPage>> {
    let page = sqlx::query_as::<_, AboutPage>("SELECT * FROM about_page WHERE id = ?")
        .bind(ABOUT_PAGE_ID)
        .fetch_optional(pool)
        .await?;

    Ok(page)
}

/// Insert or overwrite the about page copy.
pub async fn upsert_about_page(
    pool: &SqlitePool,
    input: &AboutPageInput,
    updated_by: Option<&str>,
) -> CmsResult<AboutPage> {
    if input.hero_title.trim().is_empty() {
        return Err(CmsError::Validation("hero_title is required".to_string()));
    }

    sqlx::query(
        r#"
        INSERT INTO about_page (id, hero_title, hero_tagline, mission_title, mission_image_url,
            mission_image_alt, mission_paragraph_1, mission_paragraph_2, story_title,
            story_paragraph_1, story_paragraph_2, story_paragraph_3, what_we_do_title,
            podcast_card_title, podcast_card_description, blog_card_title, blog_card_description,
            artist_card_title, artist_card_description, cta_title, cta_description,
            cta_button_text, updated_at, updated_by)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            hero_title = excluded.hero_title,
            hero_tagline = excluded.hero_tagline,
            mission_title = excluded.mission_title,
            mission_image_url = excluded.mission_image_url,
            mission_image_alt = excluded.mission_image_alt,
            mission_paragraph_1 = excluded.mission_paragraph_1,
            mission_paragraph_2 = excluded.mission_paragraph_2,
            story_title = excluded.story_title,
            story_paragraph_1 = excluded.story_paragraph_1,
            story_paragraph_2 = excluded.story_paragraph_2,
            story_paragraph_3 = excluded.story_paragraph_3,
            what_we_do_title = excluded.what_we_do_title,
            podcast_card_title = excluded.podcast_card_title,
            podcast_card_description = excluded.podcast_card_description,
            blog_card_title = excluded.blog_card_title,
            blog_card_description = excluded.blog_card_description,
            artist_card_title = excluded.artist_card_title,
            artist_card_description = excluded.artist_card_description,
            cta_title = excluded.cta_title,
            cta_description = excluded.cta_description,
            cta_button_text = excluded.cta_button_text,
            updated_at = excluded.updated_at,
            updated_by = excluded.updated_by
        "#,
    )
    .bind(ABOUT_PAGE_ID)
    .bind(&input.hero_title)
    .bind(&input.hero_tagline)
    .bind(&input.mission_title)
    .bind(&input.mission_image_url)
    .bind(&input.mission_image_alt)
    .bind(&input.mission_paragraph_1)
    .bind(&input.mission_paragraph_2)
    .bind(&input.story_title)
    .bind(&input.story_paragraph_1)
    .bind(&input.story_paragraph_2)
    .bind(&input.story_paragraph_3)
    .bind(&input.what_we_do_title)
    .bind(&input.podcast_card_title)
    .bind(&input.podcast_card_description)
    .bind(&input.blog_card_title)
    .bind(&input.blog_card_description)
    .bind(&input.artist_card_title)
    .bind(&input.artist_card_description)
    .bind(&input.cta_title)
    .bind(&input.cta_description)
    .bind(&input.cta_button_text)
    .bind(now_rfc3339())
    .bind(updated_by)
    .execute(pool)
    .await?;

    get_about_page(pool)
        .await?
        .ok_or_else(|| CmsError::not_found("About page"))
}

/// Load the A³ page settings row, if it has ever been saved.
pub async fn get_aaa_settings(pool: &SqlitePool) -> CmsResult<Option<AaaPageSettings>> {
    let settings =
        sqlx::query_as::<_, AaaPageSettings>("SELECT * FROM aaa_page_settings WHERE id = ?")
            .bind(AAA_SETTINGS_ID)
            .fetch_optional(pool)
            .await?;

    Ok(settings)
}

/// Insert or overwrite the A³ page settings.
pub async fn upsert_aaa_settings(
    pool: &SqlitePool,
    input: &AaaSettingsInput,
) -> CmsResult<AaaPageSettings> {
    sqlx::query(
        r#"
        INSERT INTO aaa_page_settings (id, hero_subtitle, hero_description, power_section_title,
            power_section_description, curator_title, curator_description, storyteller_title,
            storyteller_description, connector_title, connector_description, cta_button_text,
            updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            hero_subtitle = excluded.hero_subtitle,
            hero_description = excluded.hero_description,
            power_section_title = excluded.power_section_title,
            power_section_description = excluded.power_section_description,
            curator_title = excluded.curator_title,
            curator_description = excluded.curator_description,
            storyteller_title = excluded.storyteller_title,
            storyteller_description = excluded.storyteller_description,
            connector_title = excluded.connector_title,
            connector_description = excluded.connector_description,
            cta_button_text = excluded.cta_button_text,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(AAA_SETTINGS_ID)
    .bind(&input.hero_subtitle)
    .bind(&input.hero_description)
    .bind(&input.power_section_title)
    .bind(&input.power_section_description)
    .bind(&input.curator_title)
    .bind(&input.curator_description)
    .bind(&input.storyteller_title)
    .bind(&input.storyteller_description)
    .bind(&input.connector_title)
    .bind(&input.connector_description)
    .bind(&input.cta_button_text)
    .bind(now_rfc3339())
    .execute(pool)
    .await?;

    get_aaa_settings(pool)
        .await?
        .ok_or_else(|| CmsError::not_found("A³ page settings"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;

    #[tokio::test]
    async fn test_about_page_upsert_twice() {
        let pool = create_memory_pool().await.unwrap();
        assert!(get_about_page(&pool).await.unwrap().is_none());

        let mut input = AboutPageInput {
            hero_title: "The Fireside Tribe".into(),
            ..Default::default()
        };
        let first = upsert_about_page(&pool, &input, Some("editor@fireside.test"))
            .await
            .unwrap();
        assert_eq!(first.id, ABOUT_PAGE_ID);
        assert_eq!(first.updated_by.as_deref(), Some("editor@fireside.test"));
        assert!(first.updated_at.is_some());

        input.hero_title = "Join The Tribe".into();
        let second = upsert_about_page(&pool, &input, None).await.unwrap();
        assert_eq!(second.hero_title, "Join The Tribe");
        assert_eq!(second.updated_by, None);

        let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM about_page")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn test_about_page_requires_title() {
        let pool = create_memory_pool().await.unwrap();
        let input = AboutPageInput::default();
        assert!(matches!(
            upsert_about_page(&pool, &input, None).await,
            Err(CmsError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_aaa_settings_upsert() {
        let pool = create_memory_pool().await.unwrap();
        let input = AaaSettingsInput {
            hero_subtitle: "THE VOICES BEHIND THE TRIBE".into(),
            cta_button_text: "HEAR THEM IN ACTION".into(),
            ..Default::default()
        };
        let saved = upsert_aaa_settings(&pool, &input).await.unwrap();
        assert_eq!(saved.id, AAA_SETTINGS_ID);
        assert_eq!(saved.cta_button_text, "HEAR THEM IN ACTION");
    }
}
