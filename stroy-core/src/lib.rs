//! Stroy storefront core
//!
//! Catalog browsing and cart logic for the construction-materials
//! marketplace.
//!
//! # Module structure
//!
//! ```text
//! stroy-core/src/
//! ├── catalog/   # tree, filter, search, pagination, query engine, service
//! ├── cart/      # cart store and money arithmetic
//! ├── storage/   # redb key-value slots, session preferences
//! ├── core/      # configuration
//! └── utils/     # logging
//! ```

pub mod cart;
pub mod catalog;
pub mod core;
pub mod storage;
pub mod utils;

pub use cart::CartStore;
pub use catalog::{CatalogService, CatalogSource, CategoryTree, Listing, QueryEngine, QueryRequest};
pub use crate::core::Config;
pub use storage::{KeyValueStore, MemoryStore, RedbStore, SessionPrefs};

pub use utils::logger::{init_logger, init_logger_with_file};

use anyhow::Context;

/// Load `.env`, read the configuration, create the working directory and
/// start logging
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)
        .with_context(|| format!("creating work dir {}", config.work_dir))?;

    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(config)
}
