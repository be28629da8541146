/// Server configuration read from the environment.
use fireside_shared::{CmsError, CmsResult};

/// Where uploaded images end up.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// Supabase storage bucket reached over its REST API.
    Supabase {
        url: String,
        service_key: String,
        bucket: String,
    },
    /// Plain directory served back under `public_base`.
    Local { dir: String, public_base: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub api_host: String,
    pub api_port: u16,
    pub jwt_secret: String,
    pub admin_email: String,
    pub admin_password: String,
    pub session_ttl: i64,
    pub cleanup_interval: u64,
    pub static_dir: String,
    pub asset_base_url: Option<String>,
    pub storage: StorageConfig,
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> CmsResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> CmsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| CmsError::Config(format!("{} must be set", key)))
        };
        let number = |key: &str, default: &str| -> CmsResult<i64> {
            get(key)
                .unwrap_or_else(|| default.to_string())
                .parse()
                .map_err(|_| CmsError::Config(format!("{} must be a number", key)))
        };

        let api_port = number("API_PORT", "8080")?;
        let api_port = u16::try_from(api_port)
            .map_err(|_| CmsError::Config("API_PORT out of range".to_string()))?;
        let cleanup_interval = number("SESSION_CLEANUP_INTERVAL", "300")?.max(1) as u64;

        let storage = match (get("SUPABASE_URL"), get("SUPABASE_SERVICE_ROLE_KEY")) {
            (Some(url), Some(service_key)) => StorageConfig::Supabase {
                url: url.trim_end_matches('/').to_string(),
                service_key,
                bucket: get("ASSET_BUCKET").unwrap_or_else(|| "fireside_assets".to_string()),
            },
            (Some(_), None) | (None, Some(_)) => {
                return Err(CmsError::Config(
                    "SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY must be set together".to_string(),
                ))
            }
            (None, None) => StorageConfig::Local {
                dir: get("UPLOAD_DIR").unwrap_or_else(|| "./uploads".to_string()),
                public_base: get("UPLOAD_PUBLIC_BASE").unwrap_or_else(|| "/uploads".to_string()),
            },
        };

        Ok(Config {
            database_path: get("DATABASE_PATH").unwrap_or_else(|| "./fireside.db".to_string()),
            api_host: get("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            api_port,
            jwt_secret: required("JWT_SECRET")?,
            admin_email: required("ADMIN_EMAIL")?,
            admin_password: required("ADMIN_PASSWORD")?,
            session_ttl: number("SESSION_TTL_SECS", "86400")?,
            cleanup_interval,
            static_dir: get("STATIC_DIR").unwrap_or_else(|| "./public".to_string()),
            asset_base_url: get("ASSET_BASE_URL"),
            storage,
        })
    }

    /// SQLite URL for the configured database file.
    pub fn database_url(&self) -> String {
        fireside_shared::db::sqlite_url(&self.database_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const BASE: [(&str, &str); 3] = [
        ("JWT_SECRET", "s3cret"),
        ("ADMIN_EMAIL", "admin@fireside.test"),
        ("ADMIN_PASSWORD", "hunter2"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&BASE)).unwrap();
        assert_eq!(config.api_port, 8080);
        assert_eq!(config.session_ttl, 86400);
        assert!(matches!(config.storage, StorageConfig::Local { .. }));
        assert_eq!(config.asset_base_url, None);
    }

    #[test]
    fn test_missing_secret() {
        let err = Config::from_lookup(lookup(&BASE[1..])).unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn test_supabase_storage() {
        let mut pairs = BASE.to_vec();
        pairs.push(("SUPABASE_URL", "https://proj.supabase.co/"));
        pairs.push(("SUPABASE_SERVICE_ROLE_KEY", "service"));
        let config = Config::from_lookup(lookup(&pairs)).unwrap();
        match config.storage {
            StorageConfig::Supabase { url, bucket, .. } => {
                assert_eq!(url, "https://proj.supabase.co");
                assert_eq!(bucket, "fireside_assets");
            }
            other => panic!("Expected Supabase storage, got {:?}", other),
        }
    }

    #[test]
    fn test_half_configured_supabase_rejected() {
        let mut pairs = BASE.to_vec();
        pairs.push(("SUPABASE_URL", "https://proj.supabase.co"));
        assert!(Config::from_lookup(lookup(&pairs)).is_err());
    }

    #[test]
    fn test_bad_port() {
        let mut pairs = BASE.to_vec();
        pairs.push(("API_PORT", "99999"));
        assert!(Config::from_lookup(lookup(&pairs)).is_err());
    }
}
