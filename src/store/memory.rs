//! In-memory match store for tests, development, and single-process use.

use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use crate::schema::{QueryPlan, StoredMatch, Validate};

use super::{exec, MatchStore, StoreError};

/// Append-only document store backed by a `Vec`.
///
/// Documents are the JSON serialization of [`StoredMatch`] plus an
/// `_id` field. Queries run against a snapshot, so a slow aggregation
/// never blocks appends.
pub struct MemoryStore {
    documents: RwLock<Vec<Value>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every stored document.
    pub fn documents(&self) -> Vec<Value> {
        self.documents.read().unwrap().clone()
    }
}

#[async_trait]
impl MatchStore for MemoryStore {
    async fn append(&self, record: &StoredMatch) -> Result<String, StoreError> {
        record.validate()?;
        let mut document = serde_json::to_value(record)
            .map_err(|e| StoreError::Unavailable(format!("serialization failed: {}", e)))?;

        let mut documents = self.documents.write().unwrap();
        let id = format!("m-{}", documents.len() + 1);
        document["_id"] = Value::String(id.clone());
        documents.push(document);
        log::debug!("appended match {} for owner {}", id, record.owner_id);
        Ok(id)
    }

    async fn run_query(&self, plan: &QueryPlan) -> Result<Vec<Value>, StoreError> {
        log::info!("running aggregation with {} stage(s)", plan.stages.len());
        let snapshot = self.documents.read().unwrap().clone();
        exec::run(snapshot, plan)
    }
}
