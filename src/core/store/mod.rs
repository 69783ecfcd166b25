//! Document store abstraction.
//!
//! All persistence goes through the [`DocumentStore`] trait: schemaless JSON
//! documents grouped into named collections, with identifiers assigned by the
//! store at insertion time. Two backends implement it:
//!
//! - [`MongoStore`]: the MongoDB-backed production store
//! - [`MemoryStore`]: an in-process store for tests and local runs
//!
//! The backend is chosen once at startup via [`connect`] and handed to the
//! rest of the application as an `Arc<dyn DocumentStore>`; nothing outside
//! this module sees driver types.

mod error;

pub mod memory;
pub mod mongo;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::core::config::StoreConfig;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// A document returned by a store, paired with its assigned identifier.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Store-assigned identifier in textual form.
    pub id: String,

    /// The document fields as a JSON object, identifier excluded.
    pub fields: Value,
}

/// Abstraction over the persistence layer for document collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document into a collection, returning the identifier the
    /// store assigned to it.
    async fn insert(&self, collection: &str, document: Value) -> Result<String, StoreError>;

    /// Read every document in a collection, in store-defined order.
    async fn find_all(&self, collection: &str) -> Result<Vec<RawDocument>, StoreError>;

    /// Delete the document with the given identifier.
    ///
    /// Returns `false` when the identifier does not parse into the store's
    /// id shape or references no document; no distinction is made between
    /// the two cases.
    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<bool, StoreError>;

    /// Count the documents in a collection.
    async fn count(&self, collection: &str) -> Result<u64, StoreError>;
}

/// Construct the document store backend selected by configuration.
pub async fn connect(config: &StoreConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
    match config {
        StoreConfig::Memory => {
            info!("Using in-memory document store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreConfig::Mongo(mongo) => {
            let store = MongoStore::connect(mongo).await?;
            Ok(Arc::new(store))
        }
    }
}
