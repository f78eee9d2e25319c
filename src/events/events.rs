//! Past-tense facts emitted as the pipeline makes progress.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::schema::MatchRecord;

/// Stats were successfully extracted from a screenshot pair.
#[derive(Clone, Debug)]
pub struct StatsAnalyzed {
    pub record: MatchRecord,
    pub owner_id: u64,
    pub message_id: u64,
    pub channel_id: u64,
    pub at: DateTime<Utc>,
}

impl StatsAnalyzed {
    pub fn new(record: MatchRecord, owner_id: u64, message_id: u64, channel_id: u64) -> Self {
        Self {
            record,
            owner_id,
            message_id,
            channel_id,
            at: Utc::now(),
        }
    }
}

/// A match document was durably persisted.
#[derive(Clone, Debug)]
pub struct MatchSaved {
    /// Store-assigned id, already normalized to a string.
    pub match_id: String,
    pub record: MatchRecord,
    pub owner_id: u64,
    pub message_id: u64,
    pub channel_id: u64,
    pub at: DateTime<Utc>,
}

impl MatchSaved {
    pub fn new(
        match_id: impl Into<String>,
        record: MatchRecord,
        owner_id: u64,
        message_id: u64,
        channel_id: u64,
    ) -> Self {
        Self {
            match_id: match_id.into(),
            record,
            owner_id,
            message_id,
            channel_id,
            at: Utc::now(),
        }
    }
}

/// A translated query plan ran against the store.
#[derive(Clone, Debug)]
pub struct QueryExecuted {
    /// The original natural-language question.
    pub query: String,
    /// Literal result rows, shape depending on the plan.
    pub rows: Vec<Value>,
    pub owner_id: u64,
    pub message_id: u64,
    pub channel_id: u64,
    pub at: DateTime<Utc>,
}

impl QueryExecuted {
    pub fn new(
        query: impl Into<String>,
        rows: Vec<Value>,
        owner_id: u64,
        message_id: u64,
        channel_id: u64,
    ) -> Self {
        Self {
            query: query.into(),
            rows,
            owner_id,
            message_id,
            channel_id,
            at: Utc::now(),
        }
    }
}

/// Discriminant used to route subscriptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    StatsAnalyzed,
    MatchSaved,
    QueryExecuted,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::StatsAnalyzed => "StatsAnalyzed",
            EventKind::MatchSaved => "MatchSaved",
            EventKind::QueryExecuted => "QueryExecuted",
        }
    }
}

/// Any fact the dispatcher can broadcast.
#[derive(Clone, Debug)]
pub enum Event {
    StatsAnalyzed(StatsAnalyzed),
    MatchSaved(MatchSaved),
    QueryExecuted(QueryExecuted),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::StatsAnalyzed(_) => EventKind::StatsAnalyzed,
            Event::MatchSaved(_) => EventKind::MatchSaved,
            Event::QueryExecuted(_) => EventKind::QueryExecuted,
        }
    }
}
