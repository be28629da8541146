/// Public, unauthenticated content endpoints.
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde_json::json;
use std::sync::Arc;

use fireside_shared::models::{ArtistCard, BlogPostCard, EpisodeCard};
use fireside_shared::{db, pages};

use super::{ok, resolve_image};
use crate::error::ApiResult;
use crate::AppState;

/// GET /api/health
pub async fn health() -> impl IntoResponse {
    ok(json!({ "status": "ok" }))
}

fn episode_card(base: Option<&str>, mut card: EpisodeCard) -> EpisodeCard {
    card.cover_image_url = resolve_image(base, card.cover_image_url);
    card
}

fn artist_card(base: Option<&str>, mut card: ArtistCard) -> ArtistCard {
    card.profile_image_url = resolve_image(base, card.profile_image_url);
    card
}

fn post_card(base: Option<&str>, mut card: BlogPostCard) -> BlogPostCard {
    card.featured_image_url = resolve_image(base, card.featured_image_url);
    card
}

/// GET /api/pages/home
pub async fn home(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let base = state.config.asset_base_url.as_deref();
    let mut page = pages::home_page(&state.pool).await?;

    page.episodes = page.episodes.into_iter().map(|c| episode_card(base, c)).collect();
    page.artists = page.artists.into_iter().map(|c| artist_card(base, c)).collect();
    page.posts = page.posts.into_iter().map(|c| post_card(base, c)).collect();

    Ok(ok(page))
}

/// GET /api/pages/about
pub async fn about(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut page = pages::about_page(&state.pool).await;
    page.mission_image_url = resolve_image(
        state.config.asset_base_url.as_deref(),
        page.mission_image_url,
    );
    ok(page)
}

/// GET /api/pages/aaa
pub async fn aaa(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let base = state.config.asset_base_url.as_deref();
    let mut page = pages::aaa_page(&state.pool).await;
    for host in page.authors.iter_mut() {
        host.author.profile_image_url = resolve_image(base, host.author.profile_image_url.take());
    }
    ok(page)
}

/// GET /api/episodes
pub async fn list_episodes(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let base = state.config.asset_base_url.as_deref();
    let cards: Vec<EpisodeCard> = db::list_episodes(&state.pool, None)
        .await?
        .into_iter()
        .map(|e| episode_card(base, EpisodeCard::from(e)))
        .collect();
    Ok(ok(cards))
}

/// GET /api/artists
pub async fn list_artists(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let base = state.config.asset_base_url.as_deref();
    let cards: Vec<ArtistCard> = db::list_artists(&state.pool, None)
        .await?
        .into_iter()
        .map(|a| artist_card(base, ArtistCard::from(a)))
        .collect();
    Ok(ok(cards))
}

/// GET /api/artists/:slug
pub async fn get_artist(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let mut artist = db::get_artist_by_slug(&state.pool, &slug).await?;
    artist.profile_image_url = resolve_image(
        state.config.asset_base_url.as_deref(),
        artist.profile_image_url,
    );
    Ok(ok(artist))
}

/// GET /api/blog
pub async fn list_posts(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let base = state.config.asset_base_url.as_deref();
    let cards: Vec<BlogPostCard> = db::list_blog_posts(&state.pool, None)
        .await?
        .into_iter()
        .map(|p| post_card(base, BlogPostCard::from(p)))
        .collect();
    Ok(ok(cards))
}

/// GET /api/blog/:slug
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let mut post = db::get_blog_post_by_slug(&state.pool, &slug).await?;
    post.featured_image_url = resolve_image(
        state.config.asset_base_url.as_deref(),
        post.featured_image_url,
    );
    Ok(ok(post))
}
