//! Reply formatting: a short status line plus a fenced JSON block.

use serde_json::Value;

use crate::error::PipelineError;
use crate::events::{MatchSaved, QueryExecuted};

/// Reply for a persisted match: confirmation plus the saved record.
pub fn format_match_saved(event: &MatchSaved) -> String {
    format!(
        "✅ Analysis complete! Match saved with ID: `{}`\n```json\n{}\n```",
        event.match_id,
        pretty(&serde_json::to_value(&event.record).unwrap_or(Value::Null))
    )
}

/// Reply for an executed query: mention the asker, show the rows.
pub fn format_query_result(event: &QueryExecuted) -> String {
    format!(
        "✅ Query complete for <@{}>! Database response:\n```json\n{}\n```",
        event.owner_id,
        pretty(&Value::Array(event.rows.clone()))
    )
}

/// Short human-readable failure reply. Internal detail stays in the
/// logs; the channel only sees the error's display form.
pub fn format_error(error: &PipelineError) -> String {
    format!("❌ Error processing request: {}", error)
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
