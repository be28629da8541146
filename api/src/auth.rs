/// Admin login, JWT management, and auth helpers.
use axum::http::HeaderMap;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::warn;

use fireside_shared::db;

use crate::error::ApiError;
use crate::AppState;

/// Name of the cookie carrying the admin JWT.
pub const TOKEN_COOKIE: &str = "fireside_token";

/// JWT Claims payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: admin email
    pub sub: String,
    /// Expiration (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
    /// Token id, unique per login
    pub jti: String,
}

/// Authenticated admin info.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
    pub token: String,
}

/// Compare submitted credentials with the configured admin account.
pub fn check_credentials(state: &AppState, email: &str, password: &str) -> bool {
    let email_ok = email.trim().eq_ignore_ascii_case(&state.config.admin_email);
    let password_ok = constant_time_eq(password.as_bytes(), state.config.admin_password.as_bytes());
    email_ok && password_ok
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Create a JWT token for an admin email.
pub fn create_jwt(email: &str, secret: &str, ttl_secs: i64) -> Result<String, String> {
    let now = Utc::now();
    let exp = now + Duration::seconds(ttl_secs);

    let claims = Claims {
        sub: email.to_string(),
        exp: exp.timestamp() as usize,
        iat: now.timestamp() as usize,
        jti: uuid::Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("JWT encode error: {}", e))
}

/// Validate a JWT token and return the claims.
pub fn validate_jwt(token: &str, secret: &str) -> Result<Claims, String> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| format!("JWT validation error: {}", e))?;

    Ok(token_data.claims)
}

/// `Set-Cookie` value storing the token.
pub fn session_cookie(token: &str, ttl_secs: i64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        TOKEN_COOKIE, token, ttl_secs
    )
}

/// `Set-Cookie` value expiring the token cookie.
pub fn clear_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", TOKEN_COOKIE)
}

/// Extract JWT token from request headers (Authorization header or cookie).
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    // Try Authorization: Bearer <token>
    if let Some(auth) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
        if let Some(token) = auth.strip_prefix("Bearer ") {
            return Some(token.to_string());
        }
    }

    // Fallback: try cookie
    let prefix = format!("{}=", TOKEN_COOKIE);
    if let Some(cookies) = headers.get("cookie").and_then(|v| v.to_str().ok()) {
        for cookie in cookies.split(';').map(|c| c.trim()) {
            if let Some(token) = cookie.strip_prefix(prefix.as_str()) {
                if !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }

    None
}

/// Authenticate the admin from request headers.
pub async fn authenticate(headers: &HeaderMap, state: &AppState) -> Result<AuthUser, ApiError> {
    let token = extract_token(headers)
        .ok_or_else(|| ApiError::Unauthorized("No authentication token provided".to_string()))?;

    let claims = validate_jwt(&token, &state.config.jwt_secret).map_err(ApiError::Unauthorized)?;

    // Validate against DB session
    let subject = db::validate_session(&state.pool, &token).await?;
    match subject {
        Some(subject) if subject == claims.sub => Ok(AuthUser {
            email: claims.sub,
            token,
        }),
        Some(_) => {
            warn!("Session subject mismatch for token");
            Err(ApiError::Unauthorized("Session expired or invalid".to_string()))
        }
        None => Err(ApiError::Unauthorized("Session expired or invalid".to_string())),
    }
}
