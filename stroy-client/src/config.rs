//! Client configuration

/// Where catalog data is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMode {
    /// REST API endpoints under `base_url`
    #[default]
    Api,
    /// Static JSON dumps (`/data2.json`, `/products2.json`) under `base_url`
    LocalJson,
}

/// REST endpoints
pub mod endpoints {
    pub const CATALOG: &str = "/api/catalog";
    pub const PRODUCTS: &str = "/api/products";
    /// `{id}` is replaced with the material id
    pub const PRODUCT_DETAILS: &str = "/api/products/{id}";
    pub const PRODUCT_PHOTOS: &str = "/api/products/{id}/photos";

    pub const LOCAL_CATALOG: &str = "/data2.json";
    pub const LOCAL_PRODUCTS: &str = "/products2.json";
}

/// Client configuration for the catalog backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Base URL photo paths are resolved against
    pub images_base_url: String,

    /// REST API or static JSON dumps
    pub source_mode: SourceMode,

    /// Bearer token, if the backend requires one
    pub token: Option<String>,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl ClientConfig {
    /// Create a new configuration; images resolve against the same host
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            images_base_url: base_url.clone(),
            base_url,
            source_mode: SourceMode::Api,
            token: None,
            timeout_ms: 30_000,
        }
    }

    /// Read static JSON dumps instead of the REST API
    pub fn local_json(base_url: impl Into<String>) -> Self {
        Self::new(base_url).with_source_mode(SourceMode::LocalJson)
    }

    pub fn with_source_mode(mut self, mode: SourceMode) -> Self {
        self.source_mode = mode;
        self
    }

    pub fn with_images_base_url(mut self, url: impl Into<String>) -> Self {
        self.images_base_url = url.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout_ms(mut self, ms: u64) -> Self {
        self.timeout_ms = ms;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("https://api.example.kz")
            .with_images_base_url("https://img.example.kz")
            .with_timeout_ms(5_000)
            .with_token("t0k");
        assert_eq!(config.base_url, "https://api.example.kz");
        assert_eq!(config.images_base_url, "https://img.example.kz");
        assert_eq!(config.timeout_ms, 5_000);
        assert_eq!(config.token.as_deref(), Some("t0k"));
        assert_eq!(config.source_mode, SourceMode::Api);
    }

    #[test]
    fn test_local_json_mode() {
        let config = ClientConfig::local_json("http://localhost:3000");
        assert_eq!(config.source_mode, SourceMode::LocalJson);
        assert_eq!(config.images_base_url, "http://localhost:3000");
    }
}
