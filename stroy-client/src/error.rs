//! Client error types

use shared::CatalogError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for CatalogError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(resource) => CatalogError::not_found(resource),
            other => CatalogError::transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_catalog_error() {
        let err: CatalogError = ClientError::NotFound("product 42".into()).into();
        assert!(err.is_not_found());

        let err: CatalogError = ClientError::Status {
            status: 503,
            body: "maintenance".into(),
        }
        .into();
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "Transport error: HTTP status 503: maintenance");
    }
}
