//! Combined query engine
//!
//! Category filter, then search, then pagination, with every distinct
//! `(selector, query, page, page_size)` result cached for the session.
//!
//! # Cache key
//!
//! ```text
//! {selector}|q={query:?}|p={page}|n={page_size}
//! ```
//!
//! `selector` is [`CategoryPath::cache_key`] (`all` when empty). The query is
//! trimmed and lowercased first, so inputs that match the same products share
//! one entry.

use super::filter::select_by_category;
use super::pagination::paginate;
use super::search::{normalize_query, search_refs};
use super::tree::{CategoryIndex, CategoryTree};
use parking_lot::RwLock;
use shared::{CatalogError, CatalogResult, CategoryNode, CategoryPath, PageInfo, PaginatedResult, Product};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// One listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub selector: CategoryPath,
    pub search: String,
    pub page: u32,
    pub page_size: u32,
}

impl QueryRequest {
    /// First page of the whole catalog
    pub fn new(page_size: u32) -> Self {
        Self {
            selector: CategoryPath::all(),
            search: String::new(),
            page: 1,
            page_size,
        }
    }

    pub fn with_selector(mut self, selector: CategoryPath) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Same selector and query, one page further
    pub fn next_page(&self) -> Self {
        self.clone().with_page(self.page.saturating_add(1))
    }

    pub fn cache_key(&self) -> String {
        format!(
            "{}|q={:?}|p={}|n={}",
            self.selector.cache_key(),
            normalize_query(&self.search).unwrap_or_default(),
            self.page,
            self.page_size
        )
    }

    fn validate(&self) -> CatalogResult<()> {
        if self.page == 0 {
            return Err(CatalogError::invalid_query("page must be at least 1"));
        }
        if self.page_size == 0 {
            return Err(CatalogError::invalid_query("page size must be at least 1"));
        }
        Ok(())
    }
}

/// Cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Session-wide result cache
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: RwLock<HashMap<String, Arc<PaginatedResult<Product>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Arc<PaginatedResult<Product>>> {
        let found = self.entries.read().get(key).cloned();
        match found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        found
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Last writer wins
    pub fn insert(&self, key: String, value: Arc<PaginatedResult<Product>>) {
        self.entries.write().insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

/// Immutable catalog data for one session
#[derive(Debug, Default)]
pub struct CatalogSnapshot {
    pub categories: Vec<CategoryNode>,
    pub index: CategoryIndex,
    pub tree: CategoryTree,
    pub products: Vec<Product>,
}

impl CatalogSnapshot {
    pub fn new(categories: Vec<CategoryNode>, products: Vec<Product>) -> Self {
        let index = CategoryIndex::build(&categories);
        let tree = CategoryTree::from_index(&index);
        Self {
            categories,
            index,
            tree,
            products,
        }
    }
}

/// Query engine over a snapshot
#[derive(Debug, Clone)]
pub struct QueryEngine {
    snapshot: Arc<CatalogSnapshot>,
    cache: Arc<QueryCache>,
}

impl QueryEngine {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            cache: Arc::new(QueryCache::new()),
        }
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Run a request, serving from cache when possible
    pub fn query(&self, req: &QueryRequest) -> CatalogResult<Arc<PaginatedResult<Product>>> {
        req.validate()?;

        let key = req.cache_key();
        if let Some(hit) = self.cache.get(&key) {
            tracing::trace!(key = %key, "Query cache hit");
            return Ok(hit);
        }

        let snapshot = &self.snapshot;
        let by_category = select_by_category(&snapshot.products, &snapshot.index, &req.selector)?;
        let matched = search_refs(by_category, &req.search);
        let page = paginate(&matched, req.page, req.page_size)?.map(Product::clone);

        tracing::debug!(
            key = %key,
            total = page.pagination.total_items,
            returned = page.data.len(),
            "Query computed"
        );

        let page = Arc::new(page);
        self.cache.insert(key, Arc::clone(&page));
        Ok(page)
    }

    /// Compute and cache the page after `info` in the background.
    ///
    /// Returns `None` when there is no next page, it is already cached, or
    /// no tokio runtime is available. The task checks `cancel` before doing
    /// any work.
    pub fn prefetch_next(
        &self,
        req: &QueryRequest,
        info: &PageInfo,
        cancel: CancellationToken,
    ) -> Option<JoinHandle<()>> {
        if !info.has_next_page {
            return None;
        }
        let next = req.next_page();
        if self.cache.contains(&next.cache_key()) {
            return None;
        }
        let runtime = tokio::runtime::Handle::try_current().ok()?;

        let engine = self.clone();
        Some(runtime.spawn(async move {
            tokio::task::yield_now().await;
            if cancel.is_cancelled() {
                tracing::debug!(page = next.page, "Prefetch cancelled");
                return;
            }
            match engine.query(&next) {
                Ok(_) => tracing::debug!(page = next.page, "Next page prefetched"),
                Err(e) => tracing::warn!(page = next.page, error = %e, "Prefetch failed"),
            }
        }))
    }
}
