//! Audio clip resource definition.

use serde::{Deserialize, Serialize};

use crate::domains::collections::validate;
use crate::domains::collections::validate::FieldError;

use super::Resource;

/// An audio asset as submitted by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioClip {
    /// Display name, 1–50 characters after trimming.
    pub name: String,

    /// Reference to the audio file, at least 5 characters.
    pub audio_file: String,

    /// Clip duration in seconds; must not be negative.
    pub duration: f64,

    /// Caller-supplied creation timestamp, at least 5 characters.
    pub created_at: String,
}

impl Resource for AudioClip {
    const COLLECTION: &'static str = "audio";
    const KIND: &'static str = "Audio";
    const CREATED_MESSAGE: &'static str = "Audio uploaded!";
    const DELETED_MESSAGE: &'static str = "Audio deleted!";

    fn validate(&mut self) -> Result<(), FieldError> {
        self.name = validate::trimmed_length("name", &self.name, 1, 50)?;
        validate::min_length("audio_file", &self.audio_file, 5)?;
        validate::non_negative("duration", self.duration)?;
        validate::min_length("created_at", &self.created_at, 5)?;
        Ok(())
    }
}
