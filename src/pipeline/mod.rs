//! Pipeline wiring: handlers and reactors over explicit collaborators.
//!
//! The entry point builds one bus and one dispatcher and threads them
//! through [`register_pipeline`] along with the translator, store, and
//! chat surface. Nothing here is global; two independent pipelines in
//! one process stay independent.
//!
//! Flow, per request:
//!
//! ```text
//! AnalyzeImages ──▶ translator ──▶ StatsAnalyzed ──▶ store ──▶ MatchSaved ──▶ chat
//! QueryMatches  ──▶ translator ──▶ store ──▶ QueryExecuted ──▶ chat
//! ```

mod handlers;
mod reactors;

use std::sync::Arc;

use crate::bus::{Command, CommandBus, CommandKind, RegistrationConflict};
use crate::chat::ChatSurface;
use crate::error::PipelineError;
use crate::events::{Event, EventDispatcher, EventKind};
use crate::store::MatchStore;
use crate::translator::Translator;

/// Bind the whole pipeline: two command handlers, the persistence
/// reactor, and the notification reactors.
///
/// Call once at startup. A second call on the same bus fails with a
/// [`RegistrationConflict`] — commands have exactly one handler.
pub fn register_pipeline(
    bus: &CommandBus,
    dispatcher: &Arc<EventDispatcher>,
    translator: Arc<dyn Translator>,
    store: Arc<dyn MatchStore>,
    chat: Arc<dyn ChatSurface>,
) -> Result<(), RegistrationConflict> {
    {
        let translator = Arc::clone(&translator);
        let dispatcher = Arc::clone(dispatcher);
        bus.register(CommandKind::AnalyzeImages, move |command| {
            let translator = Arc::clone(&translator);
            let dispatcher = Arc::clone(&dispatcher);
            async move {
                let Command::AnalyzeImages(command) = command else {
                    return Err(PipelineError::Internal(
                        "analyze handler received a mismatched command".into(),
                    ));
                };
                handlers::analyze_images(command, translator, dispatcher).await
            }
        })?;
    }

    {
        let translator = Arc::clone(&translator);
        let store = Arc::clone(&store);
        let dispatcher = Arc::clone(dispatcher);
        bus.register(CommandKind::QueryMatches, move |command| {
            let translator = Arc::clone(&translator);
            let store = Arc::clone(&store);
            let dispatcher = Arc::clone(&dispatcher);
            async move {
                let Command::QueryMatches(command) = command else {
                    return Err(PipelineError::Internal(
                        "query handler received a mismatched command".into(),
                    ));
                };
                handlers::query_matches(command, translator, store, dispatcher).await
            }
        })?;
    }

    {
        let store = Arc::clone(&store);
        let dispatcher_handle = Arc::clone(dispatcher);
        dispatcher.subscribe(EventKind::StatsAnalyzed, move |event| {
            let store = Arc::clone(&store);
            let dispatcher = Arc::clone(&dispatcher_handle);
            async move {
                let Event::StatsAnalyzed(event) = event else {
                    return Err(PipelineError::Internal(
                        "persistence reactor received a mismatched event".into(),
                    ));
                };
                reactors::persist_analyzed(event, store, dispatcher).await
            }
        });
    }

    {
        let chat = Arc::clone(&chat);
        dispatcher.subscribe(EventKind::MatchSaved, move |event| {
            let chat = Arc::clone(&chat);
            async move {
                let Event::MatchSaved(event) = event else {
                    return Err(PipelineError::Internal(
                        "notification reactor received a mismatched event".into(),
                    ));
                };
                reactors::notify_match_saved(event, chat).await
            }
        });
    }

    {
        let chat = Arc::clone(&chat);
        dispatcher.subscribe(EventKind::QueryExecuted, move |event| {
            let chat = Arc::clone(&chat);
            async move {
                let Event::QueryExecuted(event) = event else {
                    return Err(PipelineError::Internal(
                        "notification reactor received a mismatched event".into(),
                    ));
                };
                reactors::notify_query_executed(event, chat).await
            }
        });
    }

    log::info!("pipeline registered: analyze + query handlers, 3 reactors");
    Ok(())
}
