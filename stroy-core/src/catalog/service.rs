//! Catalog service
//!
//! Owns the session snapshot and the query engine built over it.
//!
//! # Lifecycle
//!
//! ```text
//! new() ──> warmup() ──> list() / product() / product_images() ...
//!               │
//!               └── refresh() replaces the snapshot and its cache
//! ```
//!
//! # Stale responses
//!
//! Every `list()` call takes a generation ticket before it awaits anything.
//! When it resumes and a newer ticket has been issued meanwhile, its result
//! is reported as [`Listing::Superseded`] and the current view is left alone.
//! Starting a listing also cancels the previous listing's prefetch.

use super::images::{ImageProbe, ImageResolver, ProductImage};
use super::query::{CatalogSnapshot, QueryEngine, QueryRequest};
use super::source::CatalogSource;
use super::tree::CategoryTree;
use parking_lot::{Mutex, RwLock};
use shared::{CatalogResult, PaginatedResult, Product};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio_util::sync::CancellationToken;

/// Listing behaviour
#[derive(Debug, Clone, Copy)]
pub struct ServiceOptions {
    pub page_size: u32,
    /// Compute the next page in the background after each listing
    pub prefetch: bool,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            page_size: 20,
            prefetch: true,
        }
    }
}

/// Outcome of [`CatalogService::list`]
#[derive(Debug, Clone)]
pub enum Listing {
    Current(Arc<PaginatedResult<Product>>),
    /// A newer listing was started before this one finished
    Superseded,
}

impl Listing {
    pub fn current(self) -> Option<Arc<PaginatedResult<Product>>> {
        match self {
            Listing::Current(page) => Some(page),
            Listing::Superseded => None,
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, Listing::Superseded)
    }
}

/// Listing currently on display
#[derive(Debug, Clone)]
pub struct ListingView {
    pub request: QueryRequest,
    pub result: Arc<PaginatedResult<Product>>,
    pub generation: u64,
}

pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
    probe: Arc<dyn ImageProbe>,
    images: ImageResolver,
    options: ServiceOptions,
    engine: RwLock<Option<QueryEngine>>,
    load_lock: tokio::sync::Mutex<()>,
    generation: AtomicU64,
    prefetch_cancel: Mutex<CancellationToken>,
    view: Mutex<Option<ListingView>>,
}

impl CatalogService {
    pub fn new(
        source: Arc<dyn CatalogSource>,
        probe: Arc<dyn ImageProbe>,
        images: ImageResolver,
        options: ServiceOptions,
    ) -> Self {
        Self {
            source,
            probe,
            images,
            options,
            engine: RwLock::new(None),
            load_lock: tokio::sync::Mutex::new(()),
            generation: AtomicU64::new(0),
            prefetch_cancel: Mutex::new(CancellationToken::new()),
            view: Mutex::new(None),
        }
    }

    pub fn options(&self) -> ServiceOptions {
        self.options
    }

    /// First request of a listing with the configured page size
    pub fn request(&self) -> QueryRequest {
        QueryRequest::new(self.options.page_size)
    }

    /// Load categories and products once; later calls are no-ops
    pub async fn warmup(&self) -> CatalogResult<()> {
        self.engine().await.map(|_| ())
    }

    /// Reload the snapshot; the old query cache goes with it
    pub async fn refresh(&self) -> CatalogResult<()> {
        let _guard = self.load_lock.lock().await;
        let snapshot = self.load_snapshot().await?;
        self.cancel_prefetch();
        *self.engine.write() = Some(QueryEngine::new(snapshot));
        tracing::info!("🔄 Catalog refreshed");
        Ok(())
    }

    async fn engine(&self) -> CatalogResult<QueryEngine> {
        if let Some(engine) = self.loaded_engine() {
            return Ok(engine);
        }

        let _guard = self.load_lock.lock().await;
        if let Some(engine) = self.loaded_engine() {
            return Ok(engine);
        }

        let engine = QueryEngine::new(self.load_snapshot().await?);
        *self.engine.write() = Some(engine.clone());
        Ok(engine)
    }

    fn loaded_engine(&self) -> Option<QueryEngine> {
        self.engine.read().clone()
    }

    async fn load_snapshot(&self) -> CatalogResult<CatalogSnapshot> {
        let (categories, products) =
            futures::try_join!(self.source.categories(), self.source.products())?;
        let snapshot = CatalogSnapshot::new(categories, products);

        tracing::info!(
            categories = snapshot.categories.len(),
            departments = snapshot.tree.departments.len(),
            products = snapshot.products.len(),
            "📦 Catalog loaded"
        );
        Ok(snapshot)
    }

    /// Nested category tree of the current snapshot
    pub async fn tree(&self) -> CatalogResult<CategoryTree> {
        Ok(self.engine().await?.snapshot().tree.clone())
    }

    /// Run a listing request and make it the current view.
    ///
    /// Errors of a listing that has been superseded are discarded as well.
    pub async fn list(&self, req: QueryRequest) -> CatalogResult<Listing> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let cancel = self.renew_prefetch_token();

        let outcome = match self.engine().await {
            Ok(engine) => engine.query(&req).map(|page| (engine, page)),
            Err(e) => Err(e),
        };

        if self.is_stale(ticket) {
            tracing::debug!(ticket, key = %req.cache_key(), "Listing superseded");
            return Ok(Listing::Superseded);
        }
        let (engine, page) = outcome?;

        {
            let mut view = self.view.lock();
            if self.is_stale(ticket) {
                return Ok(Listing::Superseded);
            }
            *view = Some(ListingView {
                request: req.clone(),
                result: Arc::clone(&page),
                generation: ticket,
            });
        }

        if self.options.prefetch {
            engine.prefetch_next(&req, &page.pagination, cancel);
        }
        Ok(Listing::Current(page))
    }

    pub fn current_view(&self) -> Option<ListingView> {
        self.view.lock().clone()
    }

    /// Most recently issued listing ticket
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn is_stale(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != ticket
    }

    fn renew_prefetch_token(&self) -> CancellationToken {
        let mut current = self.prefetch_cancel.lock();
        current.cancel();
        *current = CancellationToken::new();
        current.clone()
    }

    /// Stop any in-flight prefetch
    pub fn cancel_prefetch(&self) {
        self.prefetch_cancel.lock().cancel();
    }

    /// Product details; `NotFound` propagates
    pub async fn product(&self, material_id: i64) -> CatalogResult<Product> {
        self.source.product(material_id).await
    }

    /// Gallery for a product; photo lookup failures degrade to the placeholder
    pub async fn product_images(&self, material_id: i64) -> Vec<ProductImage> {
        let photos = match self.source.product_photos(material_id).await {
            Ok(photos) => photos,
            Err(e) => {
                tracing::warn!(
                    material_id,
                    code = %e.code(),
                    category = e.code().category().name(),
                    error = %e,
                    "Photo lookup failed"
                );
                Vec::new()
            }
        };
        self.images.gallery(&photos, self.probe.as_ref()).await
    }

    /// Card image for a product
    pub async fn main_image(&self, material_id: i64) -> String {
        match self.source.product_photos(material_id).await {
            Ok(photos) => self.images.main_image(&photos, self.probe.as_ref()).await,
            Err(e) => {
                tracing::warn!(
                    material_id,
                    code = %e.code(),
                    category = e.code().category().name(),
                    error = %e,
                    "Photo lookup failed"
                );
                self.images.placeholder().to_string()
            }
        }
    }
}

impl Drop for CatalogService {
    fn drop(&mut self) {
        self.prefetch_cancel.get_mut().cancel();
    }
}
