//! Game Data Server Library
//!
//! This crate provides a small REST backend for game assets and scores,
//! with a modular architecture organized by domains.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, the
//!   HTTP listener and the document store abstraction
//! - **domains**: Business logic organized by bounded contexts
//!   - **collections**: Validated resource collections (sprites, audio clips,
//!     player scores) served over REST
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use game_data_server::core::store::memory::MemoryStore;
//! use game_data_server::core::{Config, GameServer, HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = GameServer::new(config.clone(), Arc::new(MemoryStore::new()));
//!     HttpServer::new(config.http).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, GameServer, Result};
