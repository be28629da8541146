/// Fireside API
///
/// JSON content API for the public site plus the admin CMS endpoints.
pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod storage;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use sqlx::sqlite::SqlitePool;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{Config, StorageConfig};
use crate::routes::{admin, content, public, upload};
use crate::storage::AssetStore;

/// Shared application state for all API handlers.
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    pub store: Arc<dyn AssetStore>,
}

impl AppState {
    /// State with the asset store selected by `config`.
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        let store = storage::from_config(&config.storage);
        Self {
            pool,
            config,
            store,
        }
    }
}

/// Build the full router: public content, admin auth, guarded admin CRUD, static files.
pub fn build_router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route(
            "/api/admin/episodes",
            get(content::list_episodes).post(content::create_episode),
        )
        .route(
            "/api/admin/episodes/:id",
            get(content::get_episode)
                .put(content::update_episode)
                .delete(content::delete_episode),
        )
        .route(
            "/api/admin/artists",
            get(content::list_artists).post(content::create_artist),
        )
        .route(
            "/api/admin/artists/:id",
            get(content::get_artist)
                .put(content::update_artist)
                .delete(content::delete_artist),
        )
        .route(
            "/api/admin/blog",
            get(content::list_posts).post(content::create_post),
        )
        .route(
            "/api/admin/blog/:id",
            get(content::get_post)
                .put(content::update_post)
                .delete(content::delete_post),
        )
        .route(
            "/api/admin/about",
            get(content::get_about).put(content::update_about),
        )
        .route(
            "/api/admin/aaa/settings",
            get(content::get_aaa_settings).put(content::update_aaa_settings),
        )
        .route(
            "/api/admin/aaa/quotes",
            get(content::list_quotes).post(content::create_quote),
        )
        .route("/api/admin/aaa/quotes/reorder", post(content::reorder_quotes))
        .route(
            "/api/admin/aaa/quotes/:id",
            get(content::get_quote)
                .put(content::update_quote)
                .delete(content::delete_quote),
        )
        .route(
            "/api/admin/aaa/authors",
            get(content::list_authors).post(content::create_author),
        )
        .route(
            "/api/admin/aaa/authors/:id",
            get(content::get_author)
                .put(content::update_author)
                .delete(content::delete_author),
        )
        .route(
            "/api/admin/aaa/authors/:id/fun-facts",
            get(content::get_fun_facts).put(content::replace_fun_facts),
        )
        .route("/api/admin/slug", post(admin::slug))
        .route(
            "/api/admin/upload",
            post(upload::upload).layer(DefaultBodyLimit::max(upload::MAX_UPLOAD_BYTES)),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin::require_admin,
        ));

    let public = Router::new()
        .route("/api/health", get(public::health))
        .route("/api/pages/home", get(public::home))
        .route("/api/pages/about", get(public::about))
        .route("/api/pages/aaa", get(public::aaa))
        .route("/api/episodes", get(public::list_episodes))
        .route("/api/artists", get(public::list_artists))
        .route("/api/artists/:slug", get(public::get_artist))
        .route("/api/blog", get(public::list_posts))
        .route("/api/blog/:slug", get(public::get_post))
        // Session routes (no guard)
        .route("/api/admin/login", post(admin::login))
        .route("/api/admin/logout", delete(admin::logout))
        .route("/api/admin/session", get(admin::session));

    let mut app = Router::new()
        .merge(protected)
        .merge(public)
        .nest_service("/static", ServeDir::new(&state.config.static_dir));

    // Local uploads are served back from the same process.
    if let StorageConfig::Local { dir, public_base } = &state.config.storage {
        let mount = public_base.trim_end_matches('/');
        if mount.starts_with('/') && mount.len() > 1 && mount != "/static" {
            app = app.nest_service(mount, ServeDir::new(dir));
        }
    }

    // CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    app.layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
