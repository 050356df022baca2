//! Error codes for the storefront
//!
//! Codes are grouped by range:
//! - 0xxx: General errors
//! - 6xxx: Catalog errors
//! - 9xxx: System errors (transport, storage)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storefront error code
///
/// Serialized as a plain `u16` so the UI layer can switch on it without
/// parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Query parameters rejected (page 0, page size 0)
    InvalidQuery = 2,
    /// Resource not found
    NotFound = 3,

    // ==================== 6xxx: Catalog ====================
    /// Category list is not a tree (cycle below the root)
    MalformedCatalog = 6001,

    // ==================== 9xxx: System ====================
    /// Persistent store failure
    Storage = 9002,
    /// Fetch failed (non-2xx or network)
    Transport = 9101,
    /// Stored JSON did not parse
    MalformedPersistedState = 9201,
}

impl ErrorCode {
    /// Numeric value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Display form, e.g. `E6001`
    pub fn as_str(&self) -> String {
        format!("E{:04}", self.code())
    }

    /// Default human-readable message
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidQuery => "Invalid query parameters",
            Self::NotFound => "Resource not found",
            Self::MalformedCatalog => "Category tree is malformed",
            Self::Storage => "Storage error",
            Self::Transport => "Data source request failed",
            Self::MalformedPersistedState => "Persisted state is malformed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Returned when a `u16` does not name a known code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::InvalidQuery),
            3 => Ok(Self::NotFound),
            6001 => Ok(Self::MalformedCatalog),
            9002 => Ok(Self::Storage),
            9101 => Ok(Self::Transport),
            9201 => Ok(Self::MalformedPersistedState),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_through_u16() {
        for code in [
            ErrorCode::InvalidQuery,
            ErrorCode::NotFound,
            ErrorCode::MalformedCatalog,
            ErrorCode::Storage,
            ErrorCode::Transport,
            ErrorCode::MalformedPersistedState,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
        assert_eq!(ErrorCode::try_from(7777), Err(InvalidErrorCode(7777)));
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(ErrorCode::NotFound.to_string(), "E0003");
        assert_eq!(ErrorCode::Transport.to_string(), "E9101");
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&ErrorCode::MalformedCatalog).unwrap();
        assert_eq!(json, "6001");
        let back: ErrorCode = serde_json::from_str("9201").unwrap();
        assert_eq!(back, ErrorCode::MalformedPersistedState);
    }
}
