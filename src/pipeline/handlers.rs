//! Command handlers: execute the intent, emit the fact.

use std::sync::Arc;

use crate::bus::{AnalyzeImages, QueryMatches};
use crate::error::PipelineError;
use crate::events::{Event, EventDispatcher, QueryExecuted, StatsAnalyzed};
use crate::store::MatchStore;
use crate::translator::Translator;

/// Extract a match record from the submitted screenshots, then announce
/// it. Any failure returns before the event exists — there is no
/// partial emit.
pub(crate) async fn analyze_images(
    command: AnalyzeImages,
    translator: Arc<dyn Translator>,
    dispatcher: Arc<EventDispatcher>,
) -> Result<(), PipelineError> {
    log::info!(
        "analyzing images for user {} (message {})",
        command.user_id,
        command.message_id
    );

    let record = translator
        .extract_match(&command.image_one, command.image_two.as_deref())
        .await?;
    log::info!(
        "extracted {} match on {} for user {}",
        record.game_mode(),
        record.map,
        command.user_id
    );

    let event = StatsAnalyzed::new(record, command.user_id, command.message_id, command.channel_id);
    dispatcher.emit(Event::StatsAnalyzed(event)).await;
    Ok(())
}

/// Translate the question, run the plan, announce the rows.
pub(crate) async fn query_matches(
    command: QueryMatches,
    translator: Arc<dyn Translator>,
    store: Arc<dyn MatchStore>,
    dispatcher: Arc<EventDispatcher>,
) -> Result<(), PipelineError> {
    log::info!(
        "handling query for user {} (message {}): {}",
        command.user_id,
        command.message_id,
        command.query
    );

    let plan = translator.translate_query(&command.query).await?;
    let rows = store.run_query(&plan).await?;
    log::info!("query returned {} row(s)", rows.len());

    let event = QueryExecuted::new(
        command.query,
        rows,
        command.user_id,
        command.message_id,
        command.channel_id,
    );
    dispatcher.emit(Event::QueryExecuted(event)).await;
    Ok(())
}
