//! Product images
//!
//! Photo paths come in three shapes:
//!
//! | `FileSrc` | Result |
//! |-----------|--------|
//! | `~/Content/Images/x.png` | `{base}/Content/Images/x.png` |
//! | `http://...`, `https://...` | unchanged |
//! | anything else | `{base}/{path}` |
//!
//! Images that cannot be resolved or do not load become placeholder entries.

use async_trait::async_trait;
use futures::future::join_all;
use shared::PhotoRef;
use stroy_client::HttpClient;

const ALT_TEXT: &str = "Изображение товара";

/// Absolute URL for a photo path, `None` when the path is empty
pub fn resolve_image_path(file_src: &str, base_url: &str) -> Option<String> {
    let src = file_src.trim();
    if src.is_empty() {
        return None;
    }
    let base = base_url.trim_end_matches('/');

    if let Some(rest) = src.strip_prefix("~/") {
        return Some(format!("{base}/{rest}"));
    }
    if src.starts_with("http://") || src.starts_with("https://") {
        return Some(src.to_string());
    }
    Some(format!("{base}/{}", src.trim_start_matches('/')))
}

/// Checks whether an image URL actually loads
#[async_trait]
pub trait ImageProbe: Send + Sync {
    async fn is_available(&self, url: &str) -> bool;
}

#[async_trait]
impl ImageProbe for HttpClient {
    async fn is_available(&self, url: &str) -> bool {
        self.is_image_available(url).await
    }
}

/// Probe that trusts every URL
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeAvailable;

#[async_trait]
impl ImageProbe for AssumeAvailable {
    async fn is_available(&self, _url: &str) -> bool {
        true
    }
}

/// One gallery entry
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub url: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub is_placeholder: bool,
}

#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_url: String,
    placeholder: String,
}

impl ImageResolver {
    pub fn new(base_url: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            placeholder: placeholder.into(),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn resolve(&self, file_src: &str) -> Option<String> {
        resolve_image_path(file_src, &self.base_url)
    }

    /// The single entry shown when a product has no usable image
    pub fn placeholder_image(&self) -> ProductImage {
        ProductImage {
            url: self.placeholder.clone(),
            alt: ALT_TEXT.to_string(),
            file_name: None,
            is_placeholder: true,
        }
    }

    /// Gallery for a product's photos, probed concurrently.
    ///
    /// Photos that fail to resolve or load keep their slot as placeholders.
    /// When none load at all the gallery collapses to one placeholder.
    pub async fn gallery(&self, photos: &[PhotoRef], probe: &dyn ImageProbe) -> Vec<ProductImage> {
        let entries = join_all(photos.iter().enumerate().map(|(i, photo)| async move {
            let alt = format!("{ALT_TEXT} {}", i + 1);
            let url = match self.resolve(&photo.file_src) {
                Some(url) => probe.is_available(&url).await.then_some(url),
                None => None,
            };
            ProductImage {
                is_placeholder: url.is_none(),
                url: url.unwrap_or_else(|| self.placeholder.clone()),
                alt,
                file_name: Some(photo.file_name.clone()),
            }
        }))
        .await;

        if entries.iter().all(|image| image.is_placeholder) {
            return vec![self.placeholder_image()];
        }
        entries
    }

    /// First loadable image URL, or the placeholder
    pub async fn main_image(&self, photos: &[PhotoRef], probe: &dyn ImageProbe) -> String {
        for photo in photos {
            if let Some(url) = self.resolve(&photo.file_src)
                && probe.is_available(&url).await
            {
                return url;
            }
        }
        self.placeholder.clone()
    }
}
