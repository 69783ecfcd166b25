//! Resource collections domain.
//!
//! Each collection stores one kind of game resource. Resource kinds are
//! declared in [`definitions`] and served through the generic
//! [`CollectionService`].

pub mod definitions;
pub mod error;
pub mod service;
pub mod validate;

pub use definitions::{AudioClip, PlayerScore, Resource, Sprite};
pub use error::CollectionError;
pub use service::{CollectionService, Stored};
