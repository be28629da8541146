/// API route handlers for the Fireside site and CMS.
pub mod admin;
pub mod content;
pub mod public;
pub mod upload;

use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use fireside_shared::assets::asset_url;

/// Success body: `{"success": true, "data": ...}`.
pub fn ok<T: Serialize>(data: T) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

/// Resolve an optional stored image path against the asset base URL.
pub(crate) fn resolve_image(base: Option<&str>, path: Option<String>) -> Option<String> {
    path.filter(|p| !p.is_empty()).map(|p| asset_url(base, &p))
}
