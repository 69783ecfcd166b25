//! Player score resource definition.

use serde::{Deserialize, Serialize};

use crate::domains::collections::validate;
use crate::domains::collections::validate::FieldError;

use super::Resource;

/// A score submitted at the end of a play session.
///
/// Scores and levels are plain integers with no range restriction, so
/// negative scores from penalty-heavy game modes pass through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerScore {
    /// Player display name, 1–30 characters after trimming.
    pub player_name: String,

    /// Points earned; any integer is accepted.
    pub score: i64,

    /// Level reached during the session.
    pub level: i32,

    /// Caller-supplied submission timestamp, at least 5 characters.
    pub timestamp: String,
}

impl Resource for PlayerScore {
    const COLLECTION: &'static str = "player_scores";
    const KIND: &'static str = "Score";
    const CREATED_MESSAGE: &'static str = "Score received!";
    const DELETED_MESSAGE: &'static str = "Score deleted!";

    fn validate(&mut self) -> Result<(), FieldError> {
        self.player_name = validate::trimmed_length("player_name", &self.player_name, 1, 30)?;
        validate::min_length("timestamp", &self.timestamp, 5)?;
        Ok(())
    }
}
