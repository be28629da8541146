/// Admin session endpoints, the admin guard, and form helpers.
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use fireside_shared::db;
use fireside_shared::slug::slugify;

use super::ok;
use crate::auth;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub expires_in: i64,
    pub email: String,
}

#[derive(Deserialize)]
pub struct SlugBody {
    pub text: String,
}

/// POST /api/admin/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginBody>,
) -> ApiResult<Response> {
    if !auth::check_credentials(&state, &body.email, &body.password) {
        warn!("Rejected admin login for {}", body.email.trim());
        return Err(ApiError::Unauthorized("Invalid email or password".to_string()));
    }

    let email = state.config.admin_email.clone();
    let ttl = state.config.session_ttl;
    let token =
        auth::create_jwt(&email, &state.config.jwt_secret, ttl).map_err(ApiError::Internal)?;
    db::create_session(&state.pool, &token, &email, ttl).await?;

    info!("Admin {} logged in", email);

    let cookie = auth::session_cookie(&token, ttl);
    let body = ok(AuthResponse {
        token,
        expires_in: ttl,
        email,
    });
    Ok(([(header::SET_COOKIE, cookie)], body).into_response())
}

/// DELETE /api/admin/logout
pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    if let Some(token) = auth::extract_token(&headers) {
        db::delete_session(&state.pool, &token).await?;
        info!("Admin session closed");
    }

    let body = ok(json!({ "message": "Logged out" }));
    Ok(([(header::SET_COOKIE, auth::clear_cookie())], body).into_response())
}

/// GET /api/admin/session
pub async fn session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    match auth::authenticate(&headers, &state).await {
        Ok(user) => Ok(ok(json!({ "authenticated": true, "email": user.email }))),
        Err(ApiError::Unauthorized(_)) => Ok(ok(json!({ "authenticated": false }))),
        Err(e) => Err(e),
    }
}

/// Guard for every protected admin route. The authenticated admin is made
/// available to handlers as an `Extension<AuthUser>`.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = auth::authenticate(request.headers(), &state).await?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// POST /api/admin/slug
pub async fn slug(Json(body): Json<SlugBody>) -> impl IntoResponse {
    ok(json!({ "slug": slugify(&body.text) }))
}
