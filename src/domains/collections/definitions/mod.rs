//! Resource kind definitions.
//!
//! Each resource kind is defined in its own file with its field struct,
//! constraint wiring, and confirmation messages.
//!
//! ## Adding a New Resource Kind
//!
//! 1. Create a new file (e.g., `achievement.rs`)
//! 2. Implement the `Resource` trait
//! 3. Export it here
//! 4. Register its routes in `core/http/routes.rs`

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::validate::FieldError;

pub mod audio;
pub mod score;
pub mod sprite;

pub use audio::AudioClip;
pub use score::PlayerScore;
pub use sprite::Sprite;

/// Trait for resource kinds managed by a collection service.
///
/// Implementors describe where records live, how they appear in messages,
/// and which field constraints apply. Persistence, identifier handling,
/// listing and deletion are generic.
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Name of the backing collection in the document store.
    const COLLECTION: &'static str;

    /// Display name used in messages and logs (e.g. "Sprite").
    const KIND: &'static str;

    /// Confirmation message returned when a record is created.
    const CREATED_MESSAGE: &'static str;

    /// Confirmation message returned when a record is deleted.
    const DELETED_MESSAGE: &'static str;

    /// Check every declared field constraint, trimming trimmed fields in
    /// place. Runs before any persistence call; the first violation wins.
    fn validate(&mut self) -> Result<(), FieldError>;
}
