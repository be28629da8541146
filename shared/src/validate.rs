/// Input checks applied before any content write.
use crate::dates::parse_date;
use crate::errors::{CmsError, CmsResult};
use crate::models::{
    AaaAuthorInput, AaaQuoteInput, ArtistInput, BlogPostInput, EpisodeInput,
};
use crate::slug::slug_or_derive;

fn require(field: &str, value: &str) -> CmsResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CmsError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Blank optional strings are stored as NULL.
fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn slug_for(slug: &str, source: &str) -> CmsResult<String> {
    let slug = slug_or_derive(slug, source);
    if slug.is_empty() {
        return Err(CmsError::Validation(
            "slug is required and could not be derived".to_string(),
        ));
    }
    Ok(slug)
}

fn published_at(value: Option<String>) -> CmsResult<Option<String>> {
    match optional(value) {
        Some(date) if parse_date(&date).is_none() => Err(CmsError::Validation(format!(
            "published_at '{}' is not a valid date",
            date
        ))),
        other => Ok(other),
    }
}

pub fn episode(input: EpisodeInput) -> CmsResult<EpisodeInput> {
    let title = require("title", &input.title)?;
    Ok(EpisodeInput {
        slug: slug_for(&input.slug, &title)?,
        title,
        description: optional(input.description),
        published_at: published_at(input.published_at)?,
        cover_image_url: optional(input.cover_image_url),
        cover_image_alt: optional(input.cover_image_alt),
        spotify_url: optional(input.spotify_url),
        youtube_url: optional(input.youtube_url),
        featured: input.featured,
    })
}

pub fn artist(input: ArtistInput) -> CmsResult<ArtistInput> {
    let name = require("name", &input.name)?;
    Ok(ArtistInput {
        slug: slug_for(&input.slug, &name)?,
        name,
        short_description: optional(input.short_description),
        profile_image_url: optional(input.profile_image_url),
        profile_image_alt: optional(input.profile_image_alt),
        genre: optional(input.genre),
        featured: input.featured,
        order_rank: input.order_rank,
    })
}

pub fn blog_post(input: BlogPostInput) -> CmsResult<BlogPostInput> {
    let title = require("title", &input.title)?;
    Ok(BlogPostInput {
        slug: slug_for(&input.slug, &title)?,
        title,
        excerpt: optional(input.excerpt),
        author: optional(input.author),
        content: optional(input.content),
        published_at: published_at(input.published_at)?,
        featured_image_url: optional(input.featured_image_url),
        featured_image_alt: optional(input.featured_image_alt),
        featured: input.featured,
    })
}

pub fn quote(input: AaaQuoteInput) -> CmsResult<AaaQuoteInput> {
    Ok(AaaQuoteInput {
        quote: require("quote", &input.quote)?,
        author_name: require("author_name", &input.author_name)?,
        order_rank: input.order_rank,
        active: input.active,
    })
}

pub fn author(input: AaaAuthorInput) -> CmsResult<AaaAuthorInput> {
    let name = require("name", &input.name)?;
    Ok(AaaAuthorInput {
        slug: slug_for(&input.slug, &name)?,
        name,
        full_name: require("full_name", &input.full_name)?,
        role: require("role", &input.role)?,
        profile_image_url: optional(input.profile_image_url),
        profile_image_alt: optional(input.profile_image_alt),
        ..input
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_slug_derived_from_title() {
        let input = EpisodeInput {
            title: "  Makossa Nights  ".into(),
            ..Default::default()
        };
        let checked = episode(input).unwrap();
        assert_eq!(checked.title, "Makossa Nights");
        assert_eq!(checked.slug, "makossa-nights");
    }

    #[test]
    fn test_blank_title_rejected() {
        let input = BlogPostInput {
            title: "   ".into(),
            ..Default::default()
        };
        assert!(matches!(blog_post(input), Err(CmsError::Validation(_))));
    }

    #[test]
    fn test_bad_date_rejected() {
        let input = EpisodeInput {
            title: "Ep".into(),
            published_at: Some("someday".into()),
            ..Default::default()
        };
        assert!(matches!(episode(input), Err(CmsError::Validation(_))));
    }

    #[test]
    fn test_blank_optionals_become_none() {
        let input = ArtistInput {
            name: "Tayc".into(),
            genre: Some("  ".into()),
            ..Default::default()
        };
        let checked = artist(input).unwrap();
        assert_eq!(checked.genre, None);
        assert_eq!(checked.slug, "tayc");
    }

    #[test]
    fn test_quote_requires_author() {
        let input = AaaQuoteInput {
            quote: "Music is a campfire".into(),
            author_name: "".into(),
            ..Default::default()
        };
        assert!(quote(input).is_err());
    }

    #[test]
    fn test_unsluggable_name_rejected() {
        let input = AaaAuthorInput {
            name: "³³".into(),
            full_name: "x".into(),
            role: "host".into(),
            ..Default::default()
        };
        assert!(author(input).is_err());
    }
}
