//! Sprite resource definition.
//!
//! A sprite is a named image asset: a reference to the image file, a size
//! descriptor such as "64x64", and a caller-supplied creation timestamp.

use serde::{Deserialize, Serialize};

use crate::domains::collections::validate;
use crate::domains::collections::validate::FieldError;

use super::Resource;

/// A sprite asset as submitted by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    /// Display name, 1–50 characters after trimming.
    pub name: String,

    /// Reference to the image file, at least 5 characters.
    pub sprite_image: String,

    /// Size descriptor such as "64x64", at least 3 characters.
    pub size: String,

    /// Caller-supplied creation timestamp, at least 5 characters.
    /// ISO-8601 by convention; stored as opaque text.
    pub created_at: String,
}

impl Resource for Sprite {
    const COLLECTION: &'static str = "sprites";
    const KIND: &'static str = "Sprite";
    const CREATED_MESSAGE: &'static str = "Sprite uploaded!";
    const DELETED_MESSAGE: &'static str = "Sprite deleted!";

    fn validate(&mut self) -> Result<(), FieldError> {
        self.name = validate::trimmed_length("name", &self.name, 1, 50)?;
        validate::min_length("sprite_image", &self.sprite_image, 5)?;
        validate::min_length("size", &self.size, 3)?;
        validate::min_length("created_at", &self.created_at, 5)?;
        Ok(())
    }
}
