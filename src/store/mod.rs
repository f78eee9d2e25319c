//! Store adapter: the persistence seam.
//!
//! The core never sees a database handle — just this trait. Whatever
//! backs it, ids are normalized to plain strings before they cross the
//! boundary, and query results stay loosely typed: the shape of a row
//! is query-dependent and callers render it as opaque structured data.

mod exec;
mod memory;

use async_trait::async_trait;

use std::error::Error;
use std::fmt;

use serde_json::{json, Value};

use crate::schema::{QueryPlan, QueryStage, StageOperator, StoredMatch, ValidationError};

pub use memory::MemoryStore;

/// Error type for store operations.
#[derive(Debug)]
pub enum StoreError {
    /// The input failed validation before any write was attempted.
    Rejected(ValidationError),
    /// A validated plan still did not make sense to the engine (bad
    /// expression shape for its operator).
    BadPlan(String),
    /// The backing store could not be reached or errored mid-operation.
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Rejected(e) => write!(f, "record rejected: {}", e),
            StoreError::BadPlan(msg) => write!(f, "bad query plan: {}", msg),
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {}", msg),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::Rejected(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Rejected(err)
    }
}

/// Pagination window for listing calls, with the bounds every outer
/// surface is expected to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListParams {
    pub limit: u32,
    pub skip: u32,
}

impl Default for ListParams {
    fn default() -> Self {
        Self { limit: 10, skip: 0 }
    }
}

impl ListParams {
    /// Clamp the limit into 1..=100.
    pub fn clamped(self) -> Self {
        Self {
            limit: self.limit.clamp(1, 100),
            skip: self.skip,
        }
    }
}

/// Persistence capability for match documents.
#[async_trait]
pub trait MatchStore: Send + Sync {
    /// Durably persist one record, returning its id as a plain string.
    ///
    /// Validates first and rejects rather than writing anything partial.
    async fn append(&self, record: &StoredMatch) -> Result<String, StoreError>;

    /// Execute a validated plan read-only.
    async fn run_query(&self, plan: &QueryPlan) -> Result<Vec<Value>, StoreError>;

    /// List one owner's matches with pagination.
    ///
    /// Equivalent to a filter on `owner_id`, then skip, then limit — in
    /// that order, so the offset applies before truncation.
    async fn list_by_owner(
        &self,
        owner_id: u64,
        limit: u32,
        skip: u32,
    ) -> Result<Vec<Value>, StoreError> {
        let plan = QueryPlan {
            stages: vec![
                QueryStage {
                    operator: StageOperator::Match,
                    expression: json!({ "owner_id": owner_id }),
                },
                QueryStage {
                    operator: StageOperator::Skip,
                    expression: json!(skip),
                },
                QueryStage {
                    operator: StageOperator::Limit,
                    expression: json!(limit),
                },
            ],
        };
        self.run_query(&plan).await
    }
}
