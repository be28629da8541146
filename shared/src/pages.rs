/// Page composition for the public site, with built-in copy used whenever
/// the CMS has not been filled in yet.
use std::collections::HashMap;

use sqlx::sqlite::SqlitePool;
use tracing::warn;

use crate::dates::published_label;
use crate::db;
use crate::errors::CmsResult;
use crate::models::{
    AaaAuthor, AaaFunFact, AaaPageData, AaaPageSettings, AaaQuote, AboutPage, Artist, ArtistCard,
    AuthorWithFacts, BlogPost, BlogPostCard, Episode, EpisodeCard, HomePage, AAA_SETTINGS_ID,
    ABOUT_PAGE_ID,
};

/// Episodes shown on the landing page.
pub const HOME_EPISODES: i64 = 2;
/// Artists shown on the landing page.
pub const HOME_ARTISTS: i64 = 3;
/// Blog posts shown on the landing page.
pub const HOME_POSTS: i64 = 3;

// ====== CARDS ======

impl From<Episode> for EpisodeCard {
    fn from(episode: Episode) -> Self {
        EpisodeCard {
            published_label: published_label(episode.published_at.as_deref()),
            id: episode.id,
            title: episode.title,
            slug: episode.slug,
            description: episode.description,
            cover_image_url: episode.cover_image_url,
            spotify_url: episode.spotify_url,
            youtube_url: episode.youtube_url,
            featured: episode.featured,
        }
    }
}

impl From<Artist> for ArtistCard {
    fn from(artist: Artist) -> Self {
        ArtistCard {
            id: artist.id,
            name: artist.name,
            slug: artist.slug,
            short_description: artist.short_description,
            profile_image_url: artist.profile_image_url,
            order_rank: artist.order_rank,
        }
    }
}

impl From<BlogPost> for BlogPostCard {
    fn from(post: BlogPost) -> Self {
        BlogPostCard {
            published_label: published_label(post.published_at.as_deref()),
            id: post.id,
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            author: post.author,
            featured_image_url: post.featured_image_url,
            featured: post.featured,
        }
    }
}

/// Landing page: latest episodes, first artists, latest posts.
pub async fn home_page(pool: &SqlitePool) -> CmsResult<HomePage> {
    let episodes = db::list_episodes(pool, Some(HOME_EPISODES)).await?;
    let artists = db::list_artists(pool, Some(HOME_ARTISTS)).await?;
    let posts = db::list_blog_posts(pool, Some(HOME_POSTS)).await?;

    Ok(HomePage {
        episodes: episodes.into_iter().map(EpisodeCard::from).collect(),
        artists: artists.into_iter().map(ArtistCard::from).collect(),
        posts: posts.into_iter().map(BlogPostCard::from).collect(),
    })
}

// ====== ABOUT ======

/// Stored about page, or the built-in copy when the row is missing or the
/// database cannot be read.
pub async fn about_page(pool: &SqlitePool) -> AboutPage {
    match db::get_about_page(pool).await {
        Ok(page) => about_or_fallback(page),
        Err(e) => {
            warn!("Failed to load about page content: {}", e);
            about_fallback()
        }
    }
}

pub fn about_or_fallback(page: Option<AboutPage>) -> AboutPage {
    page.unwrap_or_else(about_fallback)
}

pub fn about_fallback() -> AboutPage {
    AboutPage {
        id: ABOUT_PAGE_ID.to_string(),
        hero_title: "The Fireside Tribe".into(),
        hero_tagline: "Celebrating and promoting Cameroonian music and Afrobeats through podcasts, articles, and artist features.".into(),
        mission_title: "Our Mission".into(),
        mission_image_url: Some("/images/tripleateam1.png".into()),
        mission_image_alt: Some("The Fireside Tribe Podcast".into()),
        mission_paragraph_1: "The Fireside Tribe was created with a singular mission: to showcase the incredible talent and rich musical heritage of Cameroon to the world.".into(),
        mission_paragraph_2: "Through our podcast, blog, and artist features, we aim to create a platform that celebrates Cameroonian artists both at home and in the diaspora, highlighting their contributions to the global music scene.".into(),
        story_title: "Our Story".into(),
        story_paragraph_1: "The Fireside Tribe began as a passion project by a group of Cameroonian music enthusiasts who felt that the country's vibrant music scene deserved more international recognition.".into(),
        story_paragraph_2: "What started as casual conversations about our favorite artists evolved into a podcast, and eventually into this comprehensive platform dedicated to all things Cameroonian music.".into(),
        story_paragraph_3: "Today, we're proud to be a growing community of music lovers, artists, producers, and fans united by our appreciation for Cameroon's unique sounds and rhythms.".into(),
        what_we_do_title: "What We Do".into(),
        podcast_card_title: "The Podcast".into(),
        podcast_card_description: "Our flagship podcast features interviews with artists, producers, and industry insiders, deep dives into Cameroonian music history, and discussions about the latest trends.".into(),
        blog_card_title: "The Blog".into(),
        blog_card_description: "Our blog offers thoughtful articles, artist profiles, and analysis of Cameroonian music's influence on the global scene.".into(),
        artist_card_title: "Artist Spotlights".into(),
        artist_card_description: "We regularly feature both established and emerging Cameroonian artists, helping to amplify their voices and music.".into(),
        cta_title: "Join The Tribe".into(),
        cta_description: "Whether you're a longtime fan of Cameroonian music or just discovering it, we invite you to join our community and explore the rich sounds and stories we have to share.".into(),
        cta_button_text: "LISTEN TO OUR PODCAST".into(),
        updated_at: None,
        updated_by: None,
    }
}

// ====== A³ ======

/// Everything the A³ page needs. Each section falls back to the built-in
/// copy on its own: settings when the row is missing, quotes when no active
/// quote exists, hosts when no featured host exists.
pub async fn aaa_page(pool: &SqlitePool) -> AaaPageData {
    let settings = db::get_aaa_settings(pool).await.unwrap_or_else(|e| {
        warn!("Failed to load A³ settings: {}", e);
        None
    });
    let quotes = db::list_quotes(pool, true).await.unwrap_or_else(|e| {
        warn!("Failed to load A³ quotes: {}", e);
        Vec::new()
    });
    let authors = db::list_authors(pool, true).await.unwrap_or_else(|e| {
        warn!("Failed to load A³ hosts: {}", e);
        Vec::new()
    });

    let author_ids: Vec<String> = authors.iter().map(|a| a.id.clone()).collect();
    let facts = db::list_fun_facts_for(pool, &author_ids)
        .await
        .unwrap_or_else(|e| {
            warn!("Failed to load A³ fun facts: {}", e);
            Vec::new()
        });

    aaa_page_data(settings, quotes, authors, facts)
}

/// Assemble the A³ page from raw rows.
pub fn aaa_page_data(
    settings: Option<AaaPageSettings>,
    quotes: Vec<AaaQuote>,
    authors: Vec<AaaAuthor>,
    facts: Vec<AaaFunFact>,
) -> AaaPageData {
    let mut by_author: HashMap<String, Vec<AaaFunFact>> = HashMap::new();
    for fact in facts {
        by_author.entry(fact.author_id.clone()).or_default().push(fact);
    }

    let authors: Vec<AuthorWithFacts> = authors
        .into_iter()
        .map(|author| {
            let mut fun_facts = by_author.remove(&author.id).unwrap_or_default();
            fun_facts.sort_by_key(|f| f.order_rank);
            AuthorWithFacts { author, fun_facts }
        })
        .collect();

    AaaPageData {
        settings: settings.unwrap_or_else(aaa_settings_fallback),
        quotes: if quotes.is_empty() { aaa_quotes_fallback() } else { quotes },
        authors: if authors.is_empty() { aaa_authors_fallback() } else { authors },
    }
}

pub fn aaa_settings_fallback() -> AaaPageSettings {
    AaaPageSettings {
        id: AAA_SETTINGS_ID.to_string(),
        hero_subtitle: "THE VOICES BEHIND THE TRIBE".into(),
        hero_description: "Three voices, one mission: to amplify Cameroonian music and culture through The Fireside Tribe podcast".into(),
        power_section_title: "THE POWER OF A³".into(),
        power_section_description: "When Atem, Atem, and Anyang come together, something magical happens. Their unique perspectives, skills, and passions combine to create a podcast that's more than the sum of its parts.".into(),
        curator_title: "THE CURATOR".into(),
        curator_description: "Atem A. selects the music and artists that form the backbone of each episode".into(),
        storyteller_title: "THE STORYTELLER".into(),
        storyteller_description: "Atem N. crafts the narratives and conversations that bring the music to life".into(),
        connector_title: "THE CONNECTOR".into(),
        connector_description: "Anyang bridges cultures and opens doors for Cameroonian music globally".into(),
        cta_button_text: "HEAR THEM IN ACTION".into(),
        updated_at: None,
    }
}

fn fallback_quote(rank: i64, quote: &str, author_name: &str) -> AaaQuote {
    AaaQuote {
        id: format!("fallback-{}", rank),
        quote: quote.to_string(),
        author_name: author_name.to_string(),
        order_rank: rank,
        active: true,
    }
}

pub fn aaa_quotes_fallback() -> Vec<AaaQuote> {
    vec![
        fallback_quote(
            1,
            "Music is the universal language that connects us all, but Cameroonian music speaks with a unique accent that the world needs to hear.",
            "Atem A.",
        ),
        fallback_quote(
            2,
            "Our podcast is a campfire where stories and sounds from Cameroon can warm the hearts of listeners worldwide.",
            "Atem N.",
        ),
        fallback_quote(
            3,
            "We don't just talk about music, we translate culture and build bridges between Cameroon and the global stage.",
            "Anyang",
        ),
    ]
}

struct FallbackHost {
    slug: &'static str,
    name: &'static str,
    role: &'static str,
    color: &'static str,
    shadow_rgba: &'static str,
    bio: &'static str,
    image: &'static str,
    facts: [&'static str; 3],
}

const FALLBACK_HOSTS: [FallbackHost; 3] = [
    FallbackHost {
        slug: "atem-keng",
        name: "Atem Keng",
        role: "Music Enthusiast & Digital Innovator",
        color: "red-500",
        shadow_rgba: "239,68,68,1",
        bio: "<p class=\"mb-4\">Atem Keng is the music technology enthusiast of The Fireside Tribe. With a passion for music discovery and curation, he's developed innovative ways to share and promote Cameroonian music through playlists and digital platforms.</p><p class=\"mb-4\">Known for his insights on performance energy and the role of algorithms in music discovery, Atem K. brings a tech-savvy perspective to the podcast. He's particularly interested in how emerging artists can leverage digital platforms to gain exposure.</p><p>\"Music discovery is influenced by personal connections and social media. Algorithms play a significant role in curating music preferences. Performance energy is crucial for an artist's success.\"</p>",
        image: "/images/atemKeng_about.png",
        facts: [
            "Owns a collection of over 500 vinyl records from Cameroonian artists",
            "Played drums in a makossa fusion band for 5 years",
            "Can identify the region of Cameroon a song comes from within seconds",
        ],
    },
    FallbackHost {
        slug: "atem-eunice",
        name: "Atem Eunice",
        role: "Music Curator & Cultural Storyteller",
        color: "blue-600",
        shadow_rgba: "37,99,235,1",
        bio: "<p class=\"mb-4\">Atem Eunice brings a cultural depth to The Fireside Tribe, exploring the connections between identity, food, music, and heritage. She delves into how these elements shape our understanding of ourselves and our communities.</p><p class=\"mb-4\">Her discussions on the meaning of names and the role of food in cultural exchange highlight her interest in the personal stories that connect us. She's passionate about how music empowers African identity and raises self-esteem.</p><p>\"Food serves as a powerful connection to cultural identity. Exploring one's cultural roots through names is important. Music plays a crucial role in raising self-esteem among Africans.\"</p>",
        image: "/images/atem_e_about.png",
        facts: [
            "Conducted over 200 interviews with musicians across Africa",
            "Produces music documentaries in her spare time",
            "Once traveled 500 miles to record a disappearing traditional music style",
        ],
    },
    FallbackHost {
        slug: "anyang",
        name: "Anyang",
        role: "Social Impact Advocate & Industry Analyst",
        color: "purple-600",
        shadow_rgba: "147,51,234,1",
        bio: "<p class=\"mb-4\">Anyang brings a unique perspective to The Fireside Tribe, focusing on the social impact of music and its role in mental health and rehabilitation. His discussions on projects like Jail Time Records highlight music's power beyond entertainment.</p><p class=\"mb-4\">With keen insights on the music industry's challenges, Anyang analyzes the investment landscape, marketing strategies, and growth opportunities for Cameroonian artists. He emphasizes the importance of environment and public engagement in nurturing talent.</p><p>\"You learn a lot from filling interviews. Music can be a form of therapy for prisoners. Creativity thrives even in challenging environments.\"</p>",
        image: "/images/anyang_afro_zoom.png",
        facts: [
            "Has organized music festivals on three continents",
            "Speaks five languages fluently",
            "Helped negotiate international distribution deals for several Cameroonian artists",
        ],
    },
];

pub fn aaa_authors_fallback() -> Vec<AuthorWithFacts> {
    FALLBACK_HOSTS
        .iter()
        .enumerate()
        .map(|(index, host)| {
            let id = format!("fallback-{}", host.slug);
            let fun_facts = host
                .facts
                .iter()
                .enumerate()
                .map(|(fact_index, fact)| AaaFunFact {
                    id: format!("{}-{}", id, fact_index + 1),
                    author_id: id.clone(),
                    fact: fact.to_string(),
                    order_rank: fact_index as i64 + 1,
                })
                .collect();

            AuthorWithFacts {
                author: AaaAuthor {
                    id: id.clone(),
                    slug: host.slug.to_string(),
                    name: host.name.to_string(),
                    full_name: host.name.to_string(),
                    role: host.role.to_string(),
                    color_bg: format!("bg-{}", host.color),
                    color_text: format!("text-{}", host.color),
                    color_border: format!("border-{}", host.color),
                    color_shadow: format!("shadow-[8px_8px_0px_0px_rgba({})]", host.shadow_rgba),
                    bio: host.bio.to_string(),
                    profile_image_url: Some(host.image.to_string()),
                    profile_image_alt: Some(format!("{} portrait", host.name)),
                    order_rank: index as i64 + 1,
                    featured: true,
                },
                fun_facts,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AaaAuthorInput, AaaQuoteInput, EpisodeInput, FunFactInput};

    #[test]
    fn test_fallback_hosts_shape() {
        let hosts = aaa_authors_fallback();
        assert_eq!(hosts.len(), 3);
        assert_eq!(hosts[1].author.color_bg, "bg-blue-600");
        assert_eq!(
            hosts[0].author.color_shadow,
            "shadow-[8px_8px_0px_0px_rgba(239,68,68,1)]"
        );
        assert!(hosts.iter().all(|h| h.fun_facts.len() == 3));
        assert_eq!(hosts[2].fun_facts[0].author_id, "fallback-anyang");
    }

    #[test]
    fn test_aaa_sections_fall_back_independently() {
        let quote = AaaQuote {
            id: "q1".into(),
            quote: "Stored quote".into(),
            author_name: "Anyang".into(),
            order_rank: 1,
            active: true,
        };
        let data = aaa_page_data(None, vec![quote], Vec::new(), Vec::new());
        assert_eq!(data.quotes.len(), 1);
        assert_eq!(data.quotes[0].quote, "Stored quote");
        assert_eq!(data.settings.hero_subtitle, "THE VOICES BEHIND THE TRIBE");
        assert_eq!(data.authors.len(), 3);
    }

    #[test]
    fn test_facts_grouped_and_sorted() {
        let author = aaa_authors_fallback().remove(0).author;
        let facts = vec![
            AaaFunFact {
                id: "f2".into(),
                author_id: author.id.clone(),
                fact: "second".into(),
                order_rank: 2,
            },
            AaaFunFact {
                id: "f1".into(),
                author_id: author.id.clone(),
                fact: "first".into(),
                order_rank: 1,
            },
            AaaFunFact {
                id: "stray".into(),
                author_id: "someone-else".into(),
                fact: "ignored".into(),
                order_rank: 1,
            },
        ];
        let data = aaa_page_data(None, Vec::new(), vec![author], facts);
        let texts: Vec<_> = data.authors[0].fun_facts.iter().map(|f| f.fact.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_aaa_page_from_database() {
        let pool = db::create_memory_pool().await.unwrap();
        db::create_quote(
            &pool,
            AaaQuoteInput {
                quote: "Hidden".into(),
                author_name: "x".into(),
                order_rank: 1,
                active: false,
            },
        )
        .await
        .unwrap();
        db::create_author(
            &pool,
            AaaAuthorInput {
                name: "Atem Keng".into(),
                full_name: "Atem Keng".into(),
                role: "Host".into(),
                featured: true,
                ..Default::default()
            },
            vec![FunFactInput {
                id: None,
                fact: "Vinyl collector".into(),
                order_rank: None,
            }],
        )
        .await
        .unwrap();

        let data = aaa_page(&pool).await;
        // Only an inactive quote exists, so the built-in quotes are shown.
        assert_eq!(data.quotes.len(), 3);
        assert_eq!(data.authors.len(), 1);
        assert_eq!(data.authors[0].fun_facts[0].fact, "Vinyl collector");
    }

    #[tokio::test]
    async fn test_about_page_fallback_when_empty() {
        let pool = db::create_memory_pool().await.unwrap();
        let page = about_page(&pool).await;
        assert_eq!(page, about_fallback());
    }

    #[tokio::test]
    async fn test_home_page_limits() {
        let pool = db::create_memory_pool().await.unwrap();
        for (i, date) in ["2025-01-01", "2025-02-01", "2025-03-01"].iter().enumerate() {
            db::create_episode(
                &pool,
                EpisodeInput {
                    title: format!("Episode {}", i + 1),
                    published_at: Some(date.to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        }

        let home = home_page(&pool).await.unwrap();
        assert_eq!(home.episodes.len(), 2);
        assert_eq!(home.episodes[0].title, "Episode 3");
        assert_eq!(home.episodes[0].published_label.as_deref(), Some("March 1, 2025"));
        assert!(home.artists.is_empty());
    }
}
