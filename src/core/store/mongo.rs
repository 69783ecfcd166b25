//! MongoDB document store.
//!
//! Maps the [`DocumentStore`] contract onto the MongoDB driver: JSON
//! documents are converted through BSON on the way in, and `_id` ObjectIds
//! are rendered as hex text on the way out. The client handle is opened once
//! at startup and lives for the process lifetime; actual connections are
//! established lazily by the driver.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, Bson, Document, doc};
use mongodb::{Client, Collection, Database};
use serde_json::Value;
use tracing::info;

use crate::core::config::MongoConfig;

use super::error::StoreError;
use super::{DocumentStore, RawDocument};

/// Document store backed by a MongoDB database.
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Open a store handle for the configured database.
    pub async fn connect(config: &MongoConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.uri).await?;
        let database = client.database(&config.database);

        info!("Document store handle opened for database '{}'", config.database);

        Ok(Self { database })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<String, StoreError> {
        let document = bson::to_document(&document)?;
        let result = self.collection(collection).insert_one(document).await?;

        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        })
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<RawDocument>, StoreError> {
        let mut cursor = self.collection(collection).find(doc! {}).await?;
        let mut documents = Vec::new();

        while let Some(mut document) = cursor.try_next().await? {
            let Some(id_value) = document.remove("_id") else {
                continue;
            };
            let id = match id_value {
                Bson::ObjectId(oid) => oid.to_hex(),
                other => other.to_string(),
            };

            documents.push(RawDocument {
                id,
                fields: serde_json::to_value(&document)?,
            });
        }

        Ok(documents)
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        // Identifiers that do not parse cannot reference any document.
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };

        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": object_id })
            .await?;

        Ok(result.deleted_count > 0)
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        Ok(self.collection(collection).count_documents(doc! {}).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_rejects_malformed_uri() {
        let config = MongoConfig {
            uri: "definitely-not-a-connection-string".to_string(),
            database: "game_db".to_string(),
        };

        let result = MongoStore::connect(&config).await;
        assert!(matches!(result, Err(StoreError::Database(_))));
    }

    #[tokio::test]
    async fn delete_with_malformed_id_reports_false() {
        // The driver connects lazily, so no server is needed here: the id
        // fails to parse and the call returns before any I/O happens.
        let store = MongoStore::connect(&MongoConfig::default()).await.unwrap();

        let deleted = store.delete_by_id("sprites", "not-an-object-id").await.unwrap();
        assert!(!deleted);
    }
}
