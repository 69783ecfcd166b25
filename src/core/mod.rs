//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the game data
//! server, including error handling, configuration, server state, the HTTP
//! listener and the document store abstraction.

pub mod config;
pub mod error;
pub mod http;
pub mod server;
pub mod store;

pub use config::{Config, StoreConfig};
pub use error::{Error, Result};
pub use http::HttpServer;
pub use server::GameServer;
