//! Catalog data source
//!
//! The service depends on this trait rather than on the HTTP client so tests
//! can plug in a static or gated source.

use async_trait::async_trait;
use shared::{CatalogResult, CategoryNode, PhotoRef, Product};
use stroy_client::HttpClient;

/// Read-only access to catalog data
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Flat category list
    async fn categories(&self) -> CatalogResult<Vec<CategoryNode>>;

    /// Full product list
    async fn products(&self) -> CatalogResult<Vec<Product>>;

    /// Single product; `NotFound` when absent
    async fn product(&self, material_id: i64) -> CatalogResult<Product>;

    /// Photos of a product
    async fn product_photos(&self, material_id: i64) -> CatalogResult<Vec<PhotoRef>>;
}

#[async_trait]
impl CatalogSource for HttpClient {
    async fn categories(&self) -> CatalogResult<Vec<CategoryNode>> {
        HttpClient::categories(self).await.map_err(Into::into)
    }

    async fn products(&self) -> CatalogResult<Vec<Product>> {
        HttpClient::products(self).await.map_err(Into::into)
    }

    async fn product(&self, material_id: i64) -> CatalogResult<Product> {
        HttpClient::product(self, material_id).await.map_err(Into::into)
    }

    async fn product_photos(&self, material_id: i64) -> CatalogResult<Vec<PhotoRef>> {
        HttpClient::product_photos(self, material_id)
            .await
            .map_err(Into::into)
    }
}
