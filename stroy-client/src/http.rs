//! HTTP client for the catalog backend

use crate::config::endpoints;
use crate::{ClientConfig, ClientError, ClientResult, SourceMode};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{CategoryNode, PhotoRef, Product};

/// HTTP client for catalog requests
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    images_base_url: String,
    source_mode: SourceMode,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            images_base_url: config.images_base_url.clone(),
            source_mode: config.source_mode,
            token: config.token.clone(),
        })
    }

    pub fn source_mode(&self) -> SourceMode {
        self.source_mode
    }

    /// Base URL photo paths are resolved against
    pub fn images_base_url(&self) -> &str {
        &self.images_base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        let mut request = self.client.get(&url);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        tracing::debug!(url = %url, "GET");
        let response = request.send().await?;
        Self::handle_response(response, path).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
        path: &str,
    ) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Err(ClientError::InvalidResponse(format!("empty body from {path}")));
        }

        serde_json::from_str(&text).map_err(Into::into)
    }

    // ========== Catalog API ==========

    /// Flat category list
    pub async fn categories(&self) -> ClientResult<Vec<CategoryNode>> {
        match self.source_mode {
            SourceMode::Api => self.get(endpoints::CATALOG).await,
            SourceMode::LocalJson => self.get(endpoints::LOCAL_CATALOG).await,
        }
    }

    /// Full product list
    pub async fn products(&self) -> ClientResult<Vec<Product>> {
        match self.source_mode {
            SourceMode::Api => self.get(endpoints::PRODUCTS).await,
            SourceMode::LocalJson => self.get(endpoints::LOCAL_PRODUCTS).await,
        }
    }

    /// Product details; `NotFound` when the id does not exist
    pub async fn product(&self, material_id: i64) -> ClientResult<Product> {
        match self.source_mode {
            SourceMode::Api => {
                let path = endpoints::PRODUCT_DETAILS.replace("{id}", &material_id.to_string());
                // only a missing product id is NotFound; other 404s stay transport failures
                self.get(&path).await.map_err(|e| match e {
                    ClientError::Status { status, .. } if status == StatusCode::NOT_FOUND.as_u16() => {
                        ClientError::NotFound(format!("product {material_id}"))
                    }
                    other => other,
                })
            }
            SourceMode::LocalJson => self
                .products()
                .await?
                .into_iter()
                .find(|p| p.material_id == material_id)
                .ok_or_else(|| ClientError::NotFound(format!("product {material_id}"))),
        }
    }

    /// Photos of a product; the static dumps carry none
    pub async fn product_photos(&self, material_id: i64) -> ClientResult<Vec<PhotoRef>> {
        match self.source_mode {
            SourceMode::Api => {
                let path = endpoints::PRODUCT_PHOTOS.replace("{id}", &material_id.to_string());
                self.get(&path).await
            }
            SourceMode::LocalJson => Ok(Vec::new()),
        }
    }

    /// Whether an image URL answers a HEAD request with 2xx
    pub async fn is_image_available(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Image unavailable");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(client.url("/api/catalog"), "http://localhost:8080/api/catalog");
        assert_eq!(client.url("data2.json"), "http://localhost:8080/data2.json");
    }
}
