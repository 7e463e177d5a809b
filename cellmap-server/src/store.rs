//! Persisted-document storage boundary.
//!
//! Documents are opaque GeoJSON blobs keyed by generated names. The trait
//! keeps storage swappable (the in-memory implementation is the default;
//! a durable backend plugs in behind the same interface) and keeps
//! handlers free of storage specifics.

use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// Body given to every newly created document.
pub const DEFAULT_DOCUMENT: &str = r#"{"type":"FeatureCollection","features":[]}"#;

/// A key-value store of named GeoJSON documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store or replace the document under `name`.
    async fn put(&self, name: &str, body: String) -> Result<()>;

    /// Fetch the document under `name`, if present.
    async fn get(&self, name: &str) -> Result<Option<String>>;

    /// True when a document exists under `name`.
    async fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.get(name).await?.is_some())
    }
}

/// In-memory document store.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<HashMap<String, String>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn put(&self, name: &str, body: String) -> Result<()> {
        let mut documents = self
            .documents
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        documents.insert(name.to_string(), body);
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<String>> {
        let documents = self
            .documents
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(documents.get(name).cloned())
    }
}
