/// Object storage backends for uploaded images.
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

use fireside_shared::{CmsError, CmsResult};

use crate::config::StorageConfig;

/// Somewhere uploaded bytes can be written and later fetched by browsers.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Store `bytes` at `path` and return the public URL. Never overwrites.
    async fn put(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> CmsResult<String>;
}

/// Build the store selected by configuration.
pub fn from_config(config: &StorageConfig) -> Arc<dyn AssetStore> {
    match config {
        StorageConfig::Supabase {
            url,
            service_key,
            bucket,
        } => Arc::new(SupabaseStore::new(url, service_key, bucket)),
        StorageConfig::Local { dir, public_base } => Arc::new(LocalStore::new(dir, public_base)),
    }
}

/// Reject absolute paths and `..` segments.
fn checked_relative(path: &str) -> CmsResult<PathBuf> {
    let candidate = Path::new(path);
    if path.is_empty()
        || !candidate
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
    {
        return Err(CmsError::Storage(format!("Invalid storage path: {}", path)));
    }
    Ok(candidate.to_path_buf())
}

// ====== SUPABASE ======

/// Supabase storage bucket, written with the service role key.
pub struct SupabaseStore {
    client: reqwest::Client,
    url: String,
    service_key: String,
    bucket: String,
}

impl SupabaseStore {
    pub fn new(url: &str, service_key: &str, bucket: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
            bucket: bucket.to_string(),
        }
    }

    pub fn object_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.url, self.bucket, path)
    }

    pub fn public_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/public/{}/{}", self.url, self.bucket, path)
    }
}

#[async_trait]
impl AssetStore for SupabaseStore {
    async fn put(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> CmsResult<String> {
        checked_relative(path)?;

        let resp = self
            .client
            .post(self.object_url(path))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .header("content-type", content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await
            .map_err(|e| CmsError::Storage(format!("Upload request failed: {}", e)))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            error!("Storage API error {}: {}", status, text);
            return Err(CmsError::Storage(format!("Storage API error: {}", status)));
        }

        info!("Uploaded {} to bucket {}", path, self.bucket);
        Ok(self.public_url(path))
    }
}

// ====== LOCAL DIRECTORY ======

/// Directory on disk, served back by the static file layer.
pub struct LocalStore {
    root: PathBuf,
    public_base: String,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>, public_base: &str) -> Self {
        Self {
            root: root.into(),
            public_base: public_base.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl AssetStore for LocalStore {
    async fn put(&self, path: &str, bytes: Vec<u8>, _content_type: &str) -> CmsResult<String> {
        let relative = checked_relative(path)?;
        let target = self.root.join(&relative);

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => {
                    CmsError::Storage(format!("{} already exists", path))
                }
                _ => CmsError::Io(e),
            })?;
        file.write_all(&bytes).await?;
        file.flush().await?;

        info!("Stored {} ({} bytes)", target.display(), bytes.len());
        Ok(format!("{}/{}", self.public_base, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_relative() {
        assert!(checked_relative("uploads/a.jpg").is_ok());
        assert!(checked_relative("../etc/passwd").is_err());
        assert!(checked_relative("/etc/passwd").is_err());
        assert!(checked_relative("uploads/../../x").is_err());
        assert!(checked_relative("").is_err());
    }

    #[test]
    fn test_supabase_urls() {
        let store = SupabaseStore::new("https://proj.supabase.co/", "key", "fireside_assets");
        assert_eq!(
            store.object_url("uploads/a.jpg"),
            "https://proj.supabase.co/storage/v1/object/fireside_assets/uploads/a.jpg"
        );
        assert_eq!(
            store.public_url("uploads/a.jpg"),
            "https://proj.supabase.co/storage/v1/object/public/fireside_assets/uploads/a.jpg"
        );
    }

    #[tokio::test]
    async fn test_local_store_writes_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path(), "/uploads/");

        let url = store
            .put("covers/1-2.png", b"png".to_vec(), "image/png")
            .await
            .unwrap();
        assert_eq!(url, "/uploads/covers/1-2.png");
        assert_eq!(std::fs::read(dir.path().join("covers/1-2.png")).unwrap(), b"png");

        let again = store.put("covers/1-2.png", b"new".to_vec(), "image/png").await;
        assert!(matches!(again, Err(CmsError::Storage(_))));
    }

    #[tokio::test]
    async fn test_local_store_rejects_escape() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path(), "/uploads");
        assert!(store.put("../evil.jpg", vec![1], "image/jpeg").await.is_err());
    }
}
