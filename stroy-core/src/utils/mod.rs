//! Utilities
//!
//! - Logging bootstrap

pub mod logger;
