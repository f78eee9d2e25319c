//! Persisted match document: a record plus ownership and reply routing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{Validate, ValidationError};
use super::record::MatchRecord;

/// A match record with provenance, as it lives in the store.
///
/// Built exactly once, at the moment persistence succeeds, and never
/// mutated afterwards — a correction is a new document, not an update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredMatch {
    /// Opaque numeric handle of the user who submitted the screenshots.
    pub owner_id: u64,
    /// Message that triggered the analysis, for reply routing.
    pub message_id: u64,
    /// Channel that triggered the analysis, for reply routing.
    pub channel_id: u64,
    pub stats: MatchRecord,
    pub created_at: DateTime<Utc>,
}

impl StoredMatch {
    pub fn new(
        stats: MatchRecord,
        owner_id: u64,
        message_id: u64,
        channel_id: u64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            owner_id,
            message_id,
            channel_id,
            stats,
            created_at,
        }
    }
}

impl Validate for StoredMatch {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.owner_id == 0 {
            return Err(ValidationError::new("owner_id", "must be a positive id"));
        }
        if self.message_id == 0 {
            return Err(ValidationError::new("message_id", "must be a positive id"));
        }
        if self.channel_id == 0 {
            return Err(ValidationError::new("channel_id", "must be a positive id"));
        }
        self.stats.validate().map_err(|e| e.prefixed("stats"))
    }
}
