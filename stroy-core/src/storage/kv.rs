//! Key-value slots that survive restarts
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `kv` | slot name | JSON text | Cart contents, session preferences |
//!
//! redb commits are durable once `commit()` returns, so a mutation that
//! reports success is visible after the next start.

use parking_lot::Mutex;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::{CatalogError, CatalogResult};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table of string slots: key = slot name, value = JSON text
const KV_TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// Durable string slots
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> CatalogResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> CatalogResult<()>;

    fn remove(&self, key: &str) -> CatalogResult<()>;
}

/// redb errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),
}

impl From<StorageError> for CatalogError {
    fn from(err: StorageError) -> Self {
        CatalogError::storage(err.to_string())
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Store backed by a redb file
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_string()))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Number of stored slots
    pub fn len(&self) -> StorageResult<u64> {
        use redb::ReadableTableMetadata;
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;
        Ok(table.len()?)
    }

    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }

    /// All slot names in key order
    pub fn keys(&self) -> StorageResult<Vec<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;
        let mut keys = Vec::new();
        for entry in table.iter()? {
            let (key, _) = entry?;
            keys.push(key.value().to_string());
        }
        Ok(keys)
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> CatalogResult<Option<String>> {
        Ok(self.read(key)?)
    }

    fn set(&self, key: &str, value: &str) -> CatalogResult<()> {
        Ok(self.write(key, value)?)
    }

    fn remove(&self, key: &str) -> CatalogResult<()> {
        Ok(self.delete(key)?)
    }
}

/// Process-local store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CatalogResult<Option<String>> {
        Ok(self.slots.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CatalogResult<()> {
        self.slots.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CatalogResult<()> {
        self.slots.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_in_memory_roundtrip() {
        let store = RedbStore::open_in_memory().unwrap();
        assert_eq!(store.get("cart").unwrap(), None);

        store.set("cart", "[]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));

        store.set("cart", "[1]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.len().unwrap(), 1);

        store.remove("cart").unwrap();
        assert_eq!(store.get("cart").unwrap(), None);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_file_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storefront.redb");

        {
            let store = RedbStore::open(&path).unwrap();
            store.set("catalog.search", "\"бетон\"").unwrap();
            store.set("catalog.page", "3").unwrap();
        }

        let store = RedbStore::open(&path).unwrap();
        assert_eq!(store.get("catalog.page").unwrap().as_deref(), Some("3"));
        assert_eq!(store.keys().unwrap(), vec!["catalog.page", "catalog.search"]);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        store.remove("a").unwrap();
        store.remove("missing").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
    }
}
