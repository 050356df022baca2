//! Stroy Client - HTTP transport for the catalog backend
//!
//! Fetches the category list, the product list, product details and
//! product photos, either from the REST API or from static JSON dumps.

pub mod config;
pub mod error;
pub mod http;

pub use config::{ClientConfig, SourceMode};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
