//! Commands and the bus that routes them.
//!
//! A command is an intent ("analyze these images"); it has exactly one
//! handler, bound at startup. Facts about what then happened travel the
//! other pipe, [`crate::events`].

mod bus;
mod command;

pub use bus::{CommandBus, RegistrationConflict};
pub use command::{AnalyzeImages, Command, CommandKind, QueryMatches};
