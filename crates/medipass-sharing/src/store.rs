//! Persistence collaborator.
//!
//! The sharing core never talks to a concrete backend. It is handed a
//! [`DocumentStore`] once at startup and writes JSON documents into named
//! collections through it.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;
use thiserror::Error;

/// Failure reported by a document store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Backend could not be reached or timed out.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Backend refused the operation (permissions, quota, rules).
    #[error("store rejected operation: {0}")]
    Rejected(String),

    /// Document could not be encoded for the backend.
    #[error("store serialization failed: {0}")]
    Serialization(String),
}

/// Key/document store with collection namespaces.
///
/// `put` replaces any existing document under the same key. Implementations
/// must be safe to share across threads; the ledger and resolver hold the
/// same instance.
pub trait DocumentStore: Send + Sync {
    fn put(&self, collection: &str, key: &str, document: Value) -> Result<(), StoreError>;

    fn get(&self, collection: &str, key: &str) -> Result<Option<Value>, StoreError>;
}

/// In-process store backed by a map. Used for tests and local development.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .map(|c| c.get(collection).map_or(0, HashMap::len))
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    /// All keys in a collection, unordered.
    pub fn keys(&self, collection: &str) -> Vec<String> {
        self.collections
            .read()
            .map(|c| {
                c.get(collection)
                    .map(|docs| docs.keys().cloned().collect())
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }
}

impl DocumentStore for MemoryStore {
    fn put(&self, collection: &str, key: &str, document: Value) -> Result<(), StoreError> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?;

        collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), document);
        Ok(())
    }

    fn get(&self, collection: &str, key: &str) -> Result<Option<Value>, StoreError> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?;

        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(key))
            .cloned())
    }
}
