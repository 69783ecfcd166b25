//! Generic collection service.
//!
//! One [`CollectionService`] instance exists per resource kind. The service
//! validates incoming resources, converts them to and from the store's
//! document representation and attaches the store-assigned identifier on
//! the way out.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::store::{DocumentStore, RawDocument};
use crate::domains::collections::error::CollectionError;

use super::definitions::Resource;

/// A resource together with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<R> {
    pub id: String,

    #[serde(flatten)]
    pub resource: R,
}

/// Validates and persists resources of one kind.
pub struct CollectionService<R: Resource> {
    store: Arc<dyn DocumentStore>,
    _marker: PhantomData<R>,
}

impl<R: Resource> Clone for CollectionService<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _marker: PhantomData,
        }
    }
}

impl<R: Resource> CollectionService<R> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Validates the resource and inserts it into the collection.
    ///
    /// Validation happens before any store call, so an invalid resource
    /// never reaches the database.
    pub async fn create(&self, mut resource: R) -> Result<Stored<R>, CollectionError> {
        resource.validate()?;

        let document = serde_json::to_value(&resource)?;
        let id = self.store.insert(R::COLLECTION, document).await?;
        info!(kind = R::KIND, %id, "Resource created");

        Ok(Stored { id, resource })
    }

    /// Returns every document in the collection, in insertion order.
    pub async fn list(&self) -> Result<Vec<Stored<R>>, CollectionError> {
        let documents = self.store.find_all(R::COLLECTION).await?;

        documents
            .into_iter()
            .map(|RawDocument { id, fields }| {
                let resource = serde_json::from_value(fields)?;
                Ok(Stored { id, resource })
            })
            .collect()
    }

    /// Deletes the document with the given id.
    ///
    /// Ids that are malformed or reference no document both surface as
    /// [`CollectionError::NotFound`].
    pub async fn delete(&self, id: &str) -> Result<(), CollectionError> {
        let deleted = self.store.delete_by_id(R::COLLECTION, id).await?;
        if !deleted {
            return Err(CollectionError::not_found(R::KIND, id));
        }

        info!(kind = R::KIND, %id, "Resource deleted");
        Ok(())
    }

    /// Counts the documents currently in the collection.
    pub async fn count(&self) -> Result<u64, CollectionError> {
        Ok(self.store.count(R::COLLECTION).await?)
    }
}
