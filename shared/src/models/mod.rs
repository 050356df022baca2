//! Data models
//!
//! Wire names follow the catalog backend (`MaterialId`, `ParId`, ...);
//! camelCase aliases are accepted for hand-written fixtures.

pub mod cart;
pub mod category;
pub mod product;
pub mod serde_helpers;

// Re-exports
pub use cart::*;
pub use category::*;
pub use product::*;
