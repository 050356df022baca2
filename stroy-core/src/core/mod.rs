//! Configuration
//!
//! - [`Config`] - storefront settings loaded from the environment

pub mod config;

pub use config::Config;
