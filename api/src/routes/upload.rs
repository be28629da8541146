/// Image upload proxy to the configured asset store.
use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;
use rand::Rng;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Largest accepted upload body.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const DEFAULT_FOLDER: &str = "uploads";
const DEFAULT_EXTENSION: &str = "jpg";

/// Lowercased extension of `file_name`, or `jpg` when it has none.
pub fn file_extension(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| std::path::Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

/// Folder with surrounding slashes removed. `None` when it tries to leave the store root.
pub fn clean_folder(folder: Option<&str>) -> Option<String> {
    let folder = folder.map(|f| f.trim().trim_matches('/')).unwrap_or("");
    if folder.is_empty() {
        return Some(DEFAULT_FOLDER.to_string());
    }
    if folder
        .split('/')
        .any(|part| part.is_empty() || part == "." || part == "..")
    {
        return None;
    }
    Some(folder.to_string())
}

/// `{folder}/{unix_millis}-{random}.{ext}`
pub fn object_path(folder: &str, ext: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{}/{}-{}.{}", folder, millis, suffix, ext)
}

/// POST /api/admin/upload
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<impl IntoResponse> {
    let mut file_name: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut data: Option<Vec<u8>> = None;
    let mut folder: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Multipart error: {}", e)))?
    {
        let field_name = field.name().map(|n| n.to_string());
        match field_name.as_deref() {
            Some("file") => {
                file_name = field.file_name().map(|n| n.to_string());
                content_type = field.content_type().map(|c| c.to_string());
                data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::BadRequest(format!("Read error: {}", e)))?
                        .to_vec(),
                );
            }
            Some("folder") => {
                folder = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::BadRequest(format!("Read error: {}", e)))?,
                );
            }
            _ => {}
        }
    }

    let data = data.ok_or_else(|| ApiError::BadRequest("No file provided".to_string()))?;
    let folder = clean_folder(folder.as_deref())
        .ok_or_else(|| ApiError::BadRequest("Invalid folder".to_string()))?;
    let content_type = content_type.unwrap_or_else(|| "application/octet-stream".to_string());

    let path = object_path(&folder, &file_extension(file_name.as_deref()));
    let size = data.len();
    let url = state.store.put(&path, data, &content_type).await?;

    info!("Uploaded {} ({} bytes)", path, size);
    Ok(Json(json!({ "url": url })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(Some("cover.PNG")), "png");
        assert_eq!(file_extension(Some("archive.tar.gz")), "gz");
        assert_eq!(file_extension(Some("noext")), "jpg");
        assert_eq!(file_extension(Some("weird.p/g")), "jpg");
        assert_eq!(file_extension(None), "jpg");
    }

    #[test]
    fn test_clean_folder() {
        assert_eq!(clean_folder(None).as_deref(), Some("uploads"));
        assert_eq!(clean_folder(Some("  ")).as_deref(), Some("uploads"));
        assert_eq!(clean_folder(Some("/artists/")).as_deref(), Some("artists"));
        assert_eq!(clean_folder(Some("aaa/hosts")).as_deref(), Some("aaa/hosts"));
        assert_eq!(clean_folder(Some("../etc")), None);
        assert_eq!(clean_folder(Some("a//b")), None);
    }

    #[test]
    fn test_object_path_shape() {
        let path = object_path("episodes", "png");
        let name = path.strip_prefix("episodes/").unwrap();
        let (stem, ext) = name.rsplit_once('.').unwrap();
        assert_eq!(ext, "png");
        let (millis, suffix) = stem.split_once('-').unwrap();
        assert!(millis.parse::<i64>().unwrap() > 0);
        assert!(suffix.parse::<u32>().unwrap() < 1_000_000);
    }
}
