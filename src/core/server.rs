//! Server state and lifecycle management.
//!
//! This module contains the main server state that the HTTP layer operates
//! on. It bundles one [`CollectionService`] per resource kind on top of a
//! shared document store.
//!
//! ## Resource Architecture
//!
//! Resource kinds are defined in `domains/collections/definitions/` with one
//! file per kind. Each kind declares its collection name, response messages
//! and validation rules; the generic service and HTTP handlers adapt to it
//! through the `Resource` trait.

use std::sync::Arc;

use axum::extract::FromRef;

use super::config::Config;
use super::store::DocumentStore;
use crate::domains::collections::{
    AudioClip, CollectionError, CollectionService, PlayerScore, Sprite,
};

/// The main game data server state.
///
/// Cloning is cheap; all services share the same underlying store handle.
#[derive(Clone)]
pub struct GameServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for the sprite collection.
    sprites: CollectionService<Sprite>,

    /// Service for the audio clip collection.
    audio: CollectionService<AudioClip>,

    /// Service for the player score collection.
    scores: CollectionService<PlayerScore>,
}

impl GameServer {
    /// Create a new server over the given store.
    pub fn new(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            config: Arc::new(config),
            sprites: CollectionService::new(Arc::clone(&store)),
            audio: CollectionService::new(Arc::clone(&store)),
            scores: CollectionService::new(store),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Round-trip to the document store.
    ///
    /// Counts the player score collection, which exercises the same path a
    /// real query takes. Returns the count so callers can report it.
    pub async fn check_connectivity(&self) -> Result<u64, CollectionError> {
        self.scores.count().await
    }
}

impl FromRef<GameServer> for CollectionService<Sprite> {
    fn from_ref(server: &GameServer) -> Self {
        server.sprites.clone()
    }
}

impl FromRef<GameServer> for CollectionService<AudioClip> {
    fn from_ref(server: &GameServer) -> Self {
        server.audio.clone()
    }
}

impl FromRef<GameServer> for CollectionService<PlayerScore> {
    fn from_ref(server: &GameServer) -> Self {
        server.scores.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::memory::MemoryStore;

    fn test_server() -> GameServer {
        GameServer::new(Config::default(), Arc::new(MemoryStore::new()))
    }

    #[test]
    fn server_reports_name_and_version() {
        let server = test_server();
        assert_eq!(server.name(), "game-data-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn connectivity_check_counts_scores() {
        let server = test_server();
        assert_eq!(server.check_connectivity().await.unwrap(), 0);

        let scores = CollectionService::<PlayerScore>::from_ref(&server);
        scores
            .create(PlayerScore {
                player_name: "Ada".to_string(),
                score: 10,
                level: 1,
                timestamp: "2024-01-01T00:00:00Z".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(server.check_connectivity().await.unwrap(), 1);
    }
}
