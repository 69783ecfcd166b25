//! In-memory document store.
//!
//! Backs the [`DocumentStore`] trait with per-collection vectors guarded by a
//! `tokio` read/write lock. Identifiers come from an atomic counter rendered
//! as 24 hex digits, so they share the textual shape of the production
//! store's identifiers. Intended for tests and local runs without a database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::error::StoreError;
use super::{DocumentStore, RawDocument};

/// Document store holding every collection in process memory.
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<RawDocument>>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn mint_id(&self) -> String {
        format!("{:024x}", self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<String, StoreError> {
        let id = self.mint_id();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(RawDocument {
                id: id.clone(),
                fields: document,
            });
        Ok(id)
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<RawDocument>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(false);
        };

        let before = documents.len();
        documents.retain(|document| document.id != id);
        Ok(documents.len() < before)
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).map_or(0, |documents| documents.len() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn insert_assigns_unique_ids() {
        let store = MemoryStore::new();

        let first = store.insert("sprites", json!({"name": "a"})).await.unwrap();
        let second = store.insert("sprites", json!({"name": "b"})).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(first.len(), 24);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn find_all_preserves_insertion_order() {
        let store = MemoryStore::new();
        store.insert("sprites", json!({"name": "a"})).await.unwrap();
        store.insert("sprites", json!({"name": "b"})).await.unwrap();

        let documents = store.find_all("sprites").await.unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].fields["name"], "a");
        assert_eq!(documents[1].fields["name"], "b");
    }

    #[tokio::test]
    async fn find_all_on_unknown_collection_is_empty() {
        let store = MemoryStore::new();
        assert!(store.find_all("sprites").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_document() {
        let store = MemoryStore::new();
        let id = store.insert("audio", json!({"name": "a"})).await.unwrap();
        store.insert("audio", json!({"name": "b"})).await.unwrap();

        assert!(store.delete_by_id("audio", &id).await.unwrap());
        assert_eq!(store.count("audio").await.unwrap(), 1);

        // The record is already gone, so a repeat reports nothing deleted.
        assert!(!store.delete_by_id("audio", &id).await.unwrap());
        assert_eq!(store.count("audio").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn delete_with_unknown_id_reports_false() {
        let store = MemoryStore::new();
        assert!(!store.delete_by_id("audio", "not-a-valid-id-shape").await.unwrap());
    }

    #[tokio::test]
    async fn collections_are_independent() {
        let store = MemoryStore::new();
        store.insert("sprites", json!({"name": "a"})).await.unwrap();
        store.insert("player_scores", json!({"player_name": "b"})).await.unwrap();

        assert_eq!(store.count("sprites").await.unwrap(), 1);
        assert_eq!(store.count("player_scores").await.unwrap(), 1);
        assert_eq!(store.count("audio").await.unwrap(), 0);
    }
}
