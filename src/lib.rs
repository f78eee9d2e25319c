//! Post-match scoreboard analysis pipeline.
//!
//! Screenshots of a shooter's end-of-game scoreboard go in; validated
//! match records and natural-language answers about match history come
//! out. The pipeline is command/event shaped: a [`CommandBus`] executes
//! intents through exactly one handler each, handlers emit facts, and an
//! [`EventDispatcher`] fans those facts out to persistence and
//! notification reactors. The model capability, the store, and the chat
//! surface are trait seams — swap any of them without touching the flow.
//!
//! ## Wiring
//!
//! ```ignore
//! use std::sync::Arc;
//! use debrief::{
//!     register_pipeline, AnalyzeImages, CommandBus, EventDispatcher,
//!     GeminiTranslator, MemoryStore, TranslatorConfig,
//! };
//!
//! let bus = CommandBus::new();
//! let dispatcher = Arc::new(EventDispatcher::new());
//! let translator = Arc::new(GeminiTranslator::new(TranslatorConfig::from_env()?)?);
//! let store = Arc::new(MemoryStore::new());
//!
//! register_pipeline(&bus, &dispatcher, translator, store, chat)?;
//!
//! let command = AnalyzeImages::new(image_bytes, None, user_id, message_id, channel_id)?;
//! bus.execute(command.into()).await?;
//! ```

mod bus;
mod chat;
mod config;
mod error;
mod events;
mod pipeline;
mod schema;
mod store;
mod translator;

pub use bus::{
    AnalyzeImages, Command, CommandBus, CommandKind, QueryMatches, RegistrationConflict,
};
pub use chat::{
    check_attachments, format_error, format_match_saved, format_query_result, AttachmentError,
    ChatError, ChatSurface, MAX_ATTACHMENTS, MAX_ATTACHMENT_BYTES,
};
pub use config::{MissingVar, TranslatorConfig};
pub use error::PipelineError;
pub use events::{Event, EventDispatcher, EventKind, MatchSaved, QueryExecuted, StatsAnalyzed};
pub use pipeline::register_pipeline;
pub use schema::{
    GameMap, GameMode, HardpointScoreboard, MatchRecord, MeleeWeaponStats, ModeStats,
    OverloadScoreboard, PrimaryWeapon, PrimaryWeaponStats, QueryPlan, QueryStage,
    SearchAndDestroyScoreboard, SecondaryWeapon, SecondaryWeaponStats, StageOperator, StoredMatch,
    Team, Validate, ValidationError, MAX_DAMAGE, MAX_ELIMINATIONS, MAX_HARDPOINT_TEAM_SCORE,
    MAX_HILL_TIME_SECS, MAX_OVERLOAD_TEAM_SCORE, MAX_PLAYER_SCORE, MAX_RATIO, MAX_SND_TEAM_SCORE,
};
pub use store::{ListParams, MatchStore, MemoryStore, StoreError};
pub use translator::{
    GeminiTranslator, Translator, TranslatorError, DB_QUERY_PROMPT, MATCH_ANALYSIS_PROMPT,
};
