/// Database models and form inputs shared across the Fireside crates.
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fixed primary key of the about page row.
pub const ABOUT_PAGE_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Fixed primary key of the A³ page settings row.
pub const AAA_SETTINGS_ID: &str = "00000000-0000-0000-0000-000000000002";

/// Podcast episode.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub published_at: Option<String>,
    pub cover_image_url: Option<String>,
    pub cover_image_alt: Option<String>,
    pub spotify_url: Option<String>,
    pub youtube_url: Option<String>,
    pub featured: bool,
    pub auto_synced: bool,
    pub created_at: NaiveDateTime,
}

/// Featured artist.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub short_description: Option<String>,
    pub profile_image_url: Option<String>,
    pub profile_image_alt: Option<String>,
    pub genre: Option<String>,
    pub featured: bool,
    pub order_rank: i64,
    pub created_at: NaiveDateTime,
}

/// Blog article.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub published_at: Option<String>,
    pub featured_image_url: Option<String>,
    pub featured_image_alt: Option<String>,
    pub featured: bool,
    pub created_at: NaiveDateTime,
}

/// Editable copy of the about page (singleton row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AboutPage {
    pub id: String,
    pub hero_title: String,
    pub hero_tagline: String,
    pub mission_title: String,
    pub mission_image_url: Option<String>,
    pub mission_image_alt: Option<String>,
    pub mission_paragraph_1: String,
    pub mission_paragraph_2: String,
    pub story_title: String,
    pub story_paragraph_1: String,
    pub story_paragraph_2: String,
    pub story_paragraph_3: String,
    pub what_we_do_title: String,
    pub podcast_card_title: String,
    pub podcast_card_description: String,
    pub blog_card_title: String,
    pub blog_card_description: String,
    pub artist_card_title: String,
    pub artist_card_description: String,
    pub cta_title: String,
    pub cta_description: String,
    pub cta_button_text: String,
    pub updated_at: Option<String>,
    pub updated_by: Option<String>,
}

/// Copy for the A³ hosts page (singleton row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AaaPageSettings {
    pub id: String,
    pub hero_subtitle: String,
    pub hero_description: String,
    pub power_section_title: String,
    pub power_section_description: String,
    pub curator_title: String,
    pub curator_description: String,
    pub storyteller_title: String,
    pub storyteller_description: String,
    pub connector_title: String,
    pub connector_description: String,
    pub cta_button_text: String,
    pub updated_at: Option<String>,
}

/// Quote shown in the A³ page carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AaaQuote {
    pub id: String,
    pub quote: String,
    pub author_name: String,
    pub order_rank: i64,
    pub active: bool,
}

/// One of the podcast hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AaaAuthor {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub full_name: String,
    pub role: String,
    pub color_bg: String,
    pub color_text: String,
    pub color_border: String,
    pub color_shadow: String,
    pub bio: String,
    pub profile_image_url: Option<String>,
    pub profile_image_alt: Option<String>,
    pub order_rank: i64,
    pub featured: bool,
}

/// Fun fact belonging to a host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AaaFunFact {
    pub id: String,
    pub author_id: String,
    pub fact: String,
    pub order_rank: i64,
}

/// Host together with their ordered fun facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorWithFacts {
    #[serde(flatten)]
    pub author: AaaAuthor,
    pub fun_facts: Vec<AaaFunFact>,
}

// ====== FORM INPUTS ======

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EpisodeInput {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub description: Option<String>,
    pub published_at: Option<String>,
    pub cover_image_url: Option<String>,
    pub cover_image_alt: Option<String>,
    pub spotify_url: Option<String>,
    pub youtube_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtistInput {
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub short_description: Option<String>,
    pub profile_image_url: Option<String>,
    pub profile_image_alt: Option<String>,
    pub genre: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order_rank: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogPostInput {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub published_at: Option<String>,
    pub featured_image_url: Option<String>,
    pub featured_image_alt: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AboutPageInput {
    pub hero_title: String,
    pub hero_tagline: String,
    pub mission_title: String,
    pub mission_image_url: Option<String>,
    pub mission_image_alt: Option<String>,
    pub mission_paragraph_1: String,
    pub mission_paragraph_2: String,
    pub story_title: String,
    pub story_paragraph_1: String,
    pub story_paragraph_2: String,
    pub story_paragraph_3: String,
    pub what_we_do_title: String,
    pub podcast_card_title: String,
    pub podcast_card_description: String,
    pub blog_card_title: String,
    pub blog_card_description: String,
    pub artist_card_title: String,
    pub artist_card_description: String,
    pub cta_title: String,
    pub cta_description: String,
    pub cta_button_text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AaaSettingsInput {
    pub hero_subtitle: String,
    pub hero_description: String,
    pub power_section_title: String,
    pub power_section_description: String,
    pub curator_title: String,
    pub curator_description: String,
    pub storyteller_title: String,
    pub storyteller_description: String,
    pub connector_title: String,
    pub connector_description: String,
    pub cta_button_text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AaaQuoteInput {
    pub quote: String,
    pub author_name: String,
    #[serde(default)]
    pub order_rank: i64,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AaaAuthorInput {
    #[serde(default)]
    pub slug: String,
    pub name: String,
    pub full_name: String,
    pub role: String,
    #[serde(default = "default_color_bg")]
    pub color_bg: String,
    #[serde(default = "default_color_text")]
    pub color_text: String,
    #[serde(default = "default_color_border")]
    pub color_border: String,
    #[serde(default = "default_color_shadow")]
    pub color_shadow: String,
    #[serde(default)]
    pub bio: String,
    pub profile_image_url: Option<String>,
    pub profile_image_alt: Option<String>,
    #[serde(default)]
    pub order_rank: i64,
    #[serde(default = "default_true")]
    pub featured: bool,
}

/// Fun fact as submitted by the author form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunFactInput {
    pub id: Option<String>,
    pub fact: String,
    pub order_rank: Option<i64>,
}

fn default_true() -> bool {
    true
}

fn default_color_bg() -> String {
    "bg-red-500".to_string()
}

fn default_color_text() -> String {
    "text-red-500".to_string()
}

fn default_color_border() -> String {
    "border-red-500".to_string()
}

fn default_color_shadow() -> String {
    "shadow-[8px_8px_0px_0px_rgba(239,68,68,1)]".to_string()
}

/// Episode discovered by the channel sync, ready for insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSyncedEpisode {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub published_at: String,
    pub cover_image_url: String,
    pub cover_image_alt: String,
    pub youtube_url: String,
}

// ====== PUBLIC PROJECTIONS ======

/// Episode as listed on the public pages.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeCard {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub published_label: Option<String>,
    pub cover_image_url: Option<String>,
    pub spotify_url: Option<String>,
    pub youtube_url: Option<String>,
    pub featured: bool,
}

/// Artist as listed on the public pages.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistCard {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub short_description: Option<String>,
    pub profile_image_url: Option<String>,
    pub order_rank: i64,
}

/// Blog post as listed on the public pages.
#[derive(Debug, Clone, Serialize)]
pub struct BlogPostCard {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub published_label: Option<String>,
    pub featured_image_url: Option<String>,
    pub featured: bool,
}

/// Everything the A³ page renders.
#[derive(Debug, Clone, Serialize)]
pub struct AaaPageData {
    pub settings: AaaPageSettings,
    pub quotes: Vec<AaaQuote>,
    pub authors: Vec<AuthorWithFacts>,
}

/// Sections of the landing page.
#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub episodes: Vec<EpisodeCard>,
    pub artists: Vec<ArtistCard>,
    pub posts: Vec<BlogPostCard>,
}
