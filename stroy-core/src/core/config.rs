use std::path::PathBuf;
use stroy_client::{ClientConfig, SourceMode};

/// Storefront configuration
///
/// # Environment
///
/// Every field can be overridden through an environment variable:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Directory holding `storefront.redb` |
/// | API_URL | http://localhost:8080 | Catalog backend |
/// | IMAGES_BASE_URL | API_URL | Base for `~/` photo paths |
/// | USE_LOCAL_JSON | false | Read the static JSON dumps instead of the API |
/// | PAGE_SIZE | 20 | Listing page size |
/// | PREFETCH_NEXT_PAGE | true | Compute page N+1 in the background |
/// | REQUEST_TIMEOUT_MS | 30000 | HTTP timeout (ms) |
/// | LOG_LEVEL | info | Log level |
/// | LOG_DIR | (unset) | Daily rolling log files when the directory exists |
/// | PLACEHOLDER_IMAGE | /images/placeholder.png | Fallback image |
///
/// # Example
///
/// ```ignore
/// API_URL=https://stroy.example PAGE_SIZE=40 cargo run --bin stroy -- бетон
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the persistent store
    pub work_dir: String,
    pub api_url: String,
    pub images_base_url: String,
    pub use_local_json: bool,
    pub page_size: u32,
    pub prefetch_next_page: bool,
    pub request_timeout_ms: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub placeholder_image: String,
}

impl Config {
    pub const STORE_FILE: &'static str = "storefront.redb";

    /// Load from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let api_url = std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080".into());
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            images_base_url: std::env::var("IMAGES_BASE_URL").unwrap_or_else(|_| api_url.clone()),
            api_url,
            use_local_json: std::env::var("USE_LOCAL_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            page_size: std::env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|&n| n > 0)
                .unwrap_or(20),
            prefetch_next_page: std::env::var("PREFETCH_NEXT_PAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            placeholder_image: std::env::var("PLACEHOLDER_IMAGE")
                .unwrap_or_else(|_| "/images/placeholder.png".into()),
        }
    }

    /// Override the working directory and backend, typically in tests
    pub fn with_overrides(work_dir: impl Into<String>, api_url: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.api_url = api_url.into();
        config.images_base_url = config.api_url.clone();
        config
    }

    pub fn source_mode(&self) -> SourceMode {
        if self.use_local_json {
            SourceMode::LocalJson
        } else {
            SourceMode::Api
        }
    }

    /// Client configuration for the catalog backend
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url)
            .with_source_mode(self.source_mode())
            .with_images_base_url(&self.images_base_url)
            .with_timeout_ms(self.request_timeout_ms)
    }

    /// Path of the redb file inside the working directory
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(Self::STORE_FILE)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let config = Config::with_overrides("/tmp/stroy", "http://catalog.local");
        assert_eq!(config.store_path(), PathBuf::from("/tmp/stroy/storefront.redb"));

        let client = config.client_config();
        assert_eq!(client.base_url, "http://catalog.local");
        assert_eq!(client.images_base_url, "http://catalog.local");
    }
}
