/// Admin CRUD over the site content. Every route here sits behind the admin guard.
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use fireside_shared::models::{
    AaaAuthorInput, AaaQuoteInput, AaaSettingsInput, AboutPageInput, ArtistInput, BlogPostInput,
    EpisodeInput, FunFactInput,
};
use fireside_shared::{db, pages};

use super::ok;
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::AppState;

type AppStateRef = State<Arc<AppState>>;

#[derive(Deserialize)]
pub struct AuthorBody {
    pub author: AaaAuthorInput,
    #[serde(default)]
    pub fun_facts: Vec<FunFactInput>,
}

#[derive(Deserialize)]
pub struct FunFactsBody {
    #[serde(default)]
    pub fun_facts: Vec<FunFactInput>,
}

#[derive(Deserialize)]
pub struct ReorderBody {
    pub ids: Vec<String>,
}

fn deleted(id: &str) -> impl IntoResponse {
    ok(json!({ "id": id }))
}

// ====== EPISODES ======

pub async fn list_episodes(State(state): AppStateRef) -> ApiResult<impl IntoResponse> {
    Ok(ok(db::list_episodes(&state.pool, None).await?))
}

pub async fn get_episode(
    State(state): AppStateRef,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    Ok(ok(db::get_episode(&state.pool, &id).await?))
}

pub async fn create_episode(
    State(state): AppStateRef,
    Json(input): Json<EpisodeInput>,
) -> ApiResult<impl IntoResponse> {
    let episode = db::create_episode(&state.pool, input).await?;
    info!("Created episode {}", episode.slug);
    Ok(ok(episode))
}

pub async fn update_episode(
    State(state): AppStateRef,
    Path(id): Path<String>,
    Json(input): Json<EpisodeInput>,
) -> ApiResult<impl IntoResponse> {
    Ok(ok(db::update_episode(&state.pool, &id, input).await?))
}

pub async fn delete_episode(
    State(state): AppStateRef,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    db::delete_episode(&state.pool, &id).await?;
    info!("Deleted episode {}", id);
    Ok(deleted(&id))
}

// ====== ARTISTS ======

pub async fn list_artists(State(state): AppStateRef) -> ApiResult<impl IntoResponse> {
    Ok(ok(db::list_artists(&state.pool, None).await?))
}

pub async fn get_artist(
    State(state): AppStateRef,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    Ok(ok(db::get_artist(&state.pool, &id).await?))
}

pub async fn create_artist(
    State(state): AppStateRef,
    Json(input): Json<ArtistInput>,
) -> ApiResult<impl IntoResponse> {
    let artist = db::create_artist(&state.pool, input).await?;
    info!("Created artist {}", artist.slug);
    Ok(ok(artist))
}

pub async fn update_artist(
    State(state): AppStateRef,
    Path(id): Path<String>,
    Json(input): Json<ArtistInput>,
) -> ApiResult<impl IntoResponse> {
    Ok(ok(db::update_artist(&state.pool, &id, input).await?))
}

pub async fn delete_artist(
    State(state): AppStateRef,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    db::delete_artist(&state.pool, &id).await?;
    info!("Deleted artist {}", id);
    Ok(deleted(&id))
}

// ====== BLOG ======

pub async fn list_posts(State(state): AppStateRef) -> ApiResult<impl IntoResponse> {
    Ok(ok(db::list_blog_posts(&state.pool, None).await?))
}

pub async fn get_post(
    State(state): AppStateRef,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    Ok(ok(db::get_blog_post(&state.pool, &id).await?))
}

pub async fn create_post(
    State(state): AppStateRef,
    Json(input): Json<BlogPostInput>,
) -> ApiResult<impl IntoResponse> {
    let post = db::create_blog_post(&state.pool, input).await?;
    info!("Created blog post {}", post.slug);
    Ok(ok(post))
}

pub async fn update_post(
    State(state): AppStateRef,
    Path(id): Path<String>,
    Json(input): Json<BlogPostInput>,
) -> ApiResult<impl IntoResponse> {
    Ok(ok(db::update_blog_post(&state.pool, &id, input).await?))
}

pub async fn delete_post(
    State(state): AppStateRef,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    db::delete_blog_post(&state.pool, &id).await?;
    info!("Deleted blog post {}", id);
    Ok(deleted(&id))
}

// ====== ABOUT ======

/// GET /api/admin/about: stored copy, or the built-in copy as a starting point.
pub async fn get_about(State(state): AppStateRef) -> ApiResult<impl IntoResponse> {
    let page = db::get_about_page(&state.pool).await?;
    Ok(ok(pages::about_or_fallback(page)))
}

pub async fn update_about(
    State(state): AppStateRef,
    Extension(user): Extension<AuthUser>,
    Json(input): Json<AboutPageInput>,
) -> ApiResult<impl IntoResponse> {
    let page = db::upsert_about_page(&state.pool, &input, Some(&user.email)).await?;
    info!("About page updated by {}", user.email);
    Ok(ok(page))
}

// ====== A³ ======

pub async fn get_aaa_settings(State(state): AppStateRef) -> ApiResult<impl IntoResponse> {
    let settings = db::get_aaa_settings(&state.pool)
        .await?
        .unwrap_or_else(pages::aaa_settings_fallback);
    Ok(ok(settings))
}

pub async fn update_aaa_settings(
    State(state): AppStateRef,
    Json(input): Json<AaaSettingsInput>,
) -> ApiResult<impl IntoResponse> {
    Ok(ok(db::upsert_aaa_settings(&state.pool, &input).await?))
}

pub async fn list_quotes(State(state): AppStateRef) -> ApiResult<impl IntoResponse> {
    Ok(ok(db::list_quotes(&state.pool, false).await?))
}

pub async fn get_quote(
    State(state): AppStateRef,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    Ok(ok(db::get_quote(&state.pool, &id).await?))
}

pub async fn create_quote(
    State(state): AppStateRef,
    Json(input): Json<AaaQuoteInput>,
) -> ApiResult<impl IntoResponse> {
    Ok(ok(db::create_quote(&state.pool, input).await?))
}

pub async fn update_quote(
    State(state): AppStateRef,
    Path(id): Path<String>,
    Json(input): Json<AaaQuoteInput>,
) -> ApiResult<impl IntoResponse> {
    Ok(ok(db::update_quote(&state.pool, &id, input).await?))
}

pub async fn delete_quote(
    State(state): AppStateRef,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    db::delete_quote(&state.pool, &id).await?;
    Ok(deleted(&id))
}

/// POST /api/admin/aaa/quotes/reorder
pub async fn reorder_quotes(
    State(state): AppStateRef,
    Json(body): Json<ReorderBody>,
) -> ApiResult<impl IntoResponse> {
    db::reorder_quotes(&state.pool, &body.ids).await?;
    Ok(ok(db::list_quotes(&state.pool, false).await?))
}

pub async fn list_authors(State(state): AppStateRef) -> ApiResult<impl IntoResponse> {
    Ok(ok(db::list_authors(&state.pool, false).await?))
}

pub async fn get_author(
    State(state): AppStateRef,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    Ok(ok(db::get_author_with_facts(&state.pool, &id).await?))
}

pub async fn create_author(
    State(state): AppStateRef,
    Json(body): Json<AuthorBody>,
) -> ApiResult<impl IntoResponse> {
    let host = db::create_author(&state.pool, body.author, body.fun_facts).await?;
    info!("Created host {}", host.author.slug);
    Ok(ok(host))
}

pub async fn update_author(
    State(state): AppStateRef,
    Path(id): Path<String>,
    Json(body): Json<AuthorBody>,
) -> ApiResult<impl IntoResponse> {
    Ok(ok(db::update_author(&state.pool, &id, body.author, body.fun_facts).await?))
}

pub async fn delete_author(
    State(state): AppStateRef,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    db::delete_author(&state.pool, &id).await?;
    info!("Deleted host {}", id);
    Ok(deleted(&id))
}

pub async fn get_fun_facts(
    State(state): AppStateRef,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    db::get_author(&state.pool, &id).await?;
    Ok(ok(db::list_fun_facts(&state.pool, &id).await?))
}

pub async fn replace_fun_facts(
    State(state): AppStateRef,
    Path(id): Path<String>,
    Json(body): Json<FunFactsBody>,
) -> ApiResult<impl IntoResponse> {
    Ok(ok(db::replace_fun_facts(&state.pool, &id, body.fun_facts).await?))
}
