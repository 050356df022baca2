//! Error taxonomy for the storefront
//!
//! - [`ErrorCode`]: stable numeric codes the UI layer can switch on
//! - [`ErrorCategory`]: classification by code range
//! - [`CatalogError`]: the error type returned by catalog, cart and storage operations
//!
//! # Propagation
//!
//! | Variant | Policy |
//! |---------|--------|
//! | `NotFound` | Propagated on direct product lookup; never raised by category filtering |
//! | `Transport` | Propagated on listing/search paths; swallowed on photo lookups |
//! | `MalformedPersistedState` | Always swallowed at the storage boundary (empty default) |
//! | `MalformedCatalog` | Propagated; the category list is not a tree |
//! | `Storage` | Propagated from cart mutations |
//! | `InvalidQuery` | Propagated; page or page size of zero |

mod category;
mod codes;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};

use thiserror::Error;

/// Storefront error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Product or category id not resolvable
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// Underlying fetch failed (non-2xx or network failure)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Stored JSON failed to parse
    #[error("Malformed persisted state for '{key}': {message}")]
    MalformedPersistedState { key: String, message: String },

    /// Category list contains a cycle below the root
    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),

    /// Persistent store failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Rejected query parameters
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl CatalogError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn malformed_state(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedPersistedState {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery(message.into())
    }

    /// Stable code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::Transport(_) => ErrorCode::Transport,
            Self::MalformedPersistedState { .. } => ErrorCode::MalformedPersistedState,
            Self::MalformedCatalog(_) => ErrorCode::MalformedCatalog,
            Self::Storage(_) => ErrorCode::Storage,
            Self::InvalidQuery(_) => ErrorCode::InvalidQuery,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(format!("invalid payload: {err}"))
    }
}

/// Result alias for storefront operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CatalogError::not_found("product 7").code(), ErrorCode::NotFound);
        assert_eq!(CatalogError::transport("503").code(), ErrorCode::Transport);
        assert_eq!(
            CatalogError::malformed_state("cart", "eof").code(),
            ErrorCode::MalformedPersistedState
        );
        assert_eq!(
            CatalogError::MalformedCatalog("cycle at 5".into()).code().category(),
            ErrorCategory::Catalog
        );
    }

    #[test]
    fn test_predicates() {
        assert!(CatalogError::not_found("x").is_not_found());
        assert!(!CatalogError::not_found("x").is_transport());
        assert!(CatalogError::transport("timeout").is_transport());
    }

    #[test]
    fn test_display() {
        let err = CatalogError::malformed_state("cart", "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "Malformed persisted state for 'cart': expected value at line 1"
        );
    }
}
