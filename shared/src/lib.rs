//! Shared types for the Stroy storefront
//!
//! Catalog data model (categories, products, photos), cart line items,
//! paginated results and the error taxonomy used by every crate in the
//! workspace.

pub mod error;
pub mod models;
pub mod pagination;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{CatalogError, CatalogResult, ErrorCategory, ErrorCode};
pub use models::{
    CartItem, CartItemInput, CategoryLevel, CategoryNode, CategoryPath, PhotoRef, Product,
    ROOT_PARENT_ID,
};
pub use pagination::{PageInfo, PageToken, PaginatedResult};
