//! Events and their dispatcher.
//!
//! Commands say "do this"; events say "this happened". Reactors
//! subscribe here to persist and to notify without the handlers that
//! emit the events knowing they exist.

mod dispatcher;
mod events;

pub use dispatcher::EventDispatcher;
pub use events::{Event, EventKind, MatchSaved, QueryExecuted, StatsAnalyzed};
