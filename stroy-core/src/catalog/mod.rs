//! Catalog browsing
//!
//! ```text
//! CatalogSource ──> CatalogSnapshot ──> QueryEngine ──> PaginatedResult
//!                    (index, tree)       filter → search → paginate
//! ```
//!
//! - [`tree`] - `parent_id -> children` index and the nested display tree
//! - [`filter`] - descendant closure and category filtering
//! - [`search`] - product name matching
//! - [`pagination`] - page slicing
//! - [`query`] - combined query engine, result cache and prefetch
//! - [`images`] - photo path resolution and galleries
//! - [`service`] - session snapshot, listings and the stale-response guard

pub mod filter;
pub mod images;
pub mod pagination;
pub mod query;
pub mod search;
pub mod service;
pub mod source;
pub mod tree;

pub use filter::{descendant_closure, filter_products};
pub use images::{AssumeAvailable, ImageProbe, ImageResolver, ProductImage, resolve_image_path};
pub use pagination::paginate;
pub use query::{CacheStats, CatalogSnapshot, QueryCache, QueryEngine, QueryRequest};
pub use search::search_products;
pub use service::{CatalogService, Listing, ListingView, ServiceOptions};
pub use source::CatalogSource;
pub use tree::{CategoryIndex, CategoryTree};
