//! Event reactors: persistence and notification side effects.

use std::sync::Arc;

use crate::chat::{format_match_saved, format_query_result, ChatSurface};
use crate::error::PipelineError;
use crate::events::{Event, EventDispatcher, MatchSaved, QueryExecuted, StatsAnalyzed};
use crate::schema::StoredMatch;
use crate::store::MatchStore;

/// Persist freshly analyzed stats and announce the saved match.
///
/// The stored document's `created_at` is the analysis event's
/// timestamp, not the write time.
pub(crate) async fn persist_analyzed(
    event: StatsAnalyzed,
    store: Arc<dyn MatchStore>,
    dispatcher: Arc<EventDispatcher>,
) -> Result<(), PipelineError> {
    log::info!(
        "saving match data for user {} (message {})",
        event.owner_id,
        event.message_id
    );

    let stored = StoredMatch::new(
        event.record.clone(),
        event.owner_id,
        event.message_id,
        event.channel_id,
        event.at,
    );
    let match_id = store.append(&stored).await?;
    log::info!("saved match with id {}", match_id);

    let saved = MatchSaved::new(
        match_id,
        event.record,
        event.owner_id,
        event.message_id,
        event.channel_id,
    );
    dispatcher.emit(Event::MatchSaved(saved)).await;
    Ok(())
}

/// Reply to the originating channel with the saved record.
pub(crate) async fn notify_match_saved(
    event: MatchSaved,
    chat: Arc<dyn ChatSurface>,
) -> Result<(), PipelineError> {
    let reply = format_match_saved(&event);
    chat.send(event.channel_id, &reply).await?;
    log::info!("sent match-saved reply to channel {}", event.channel_id);
    Ok(())
}

/// Reply to the originating channel with the query rows.
pub(crate) async fn notify_query_executed(
    event: QueryExecuted,
    chat: Arc<dyn ChatSurface>,
) -> Result<(), PipelineError> {
    let reply = format_query_result(&event);
    chat.send(event.channel_id, &reply).await?;
    log::info!("sent query reply to channel {}", event.channel_id);
    Ok(())
}
