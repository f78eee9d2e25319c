//! Command bus: one handler per command kind, no more, no less.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, RwLock};

use crate::error::PipelineError;

use super::command::{Command, CommandKind};

type HandlerFuture = Pin<Box<dyn Future<Output = Result<(), PipelineError>> + Send>>;
type Handler = Arc<dyn Fn(Command) -> HandlerFuture + Send + Sync>;

/// A command kind was registered twice.
///
/// Commands have exactly one handler; a second registration is a wiring
/// bug, caught here at startup rather than silently overwriting the
/// first handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationConflict(pub CommandKind);

impl fmt::Display for RegistrationConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handler already registered for {}", self.0.as_str())
    }
}

impl Error for RegistrationConflict {}

/// Routes each command to its single registered handler.
///
/// Handlers are uniformly asynchronous and their failures propagate to
/// the caller of [`execute`](CommandBus::execute) unmodified — the bus
/// never swallows an error. Registration happens once at startup; the
/// table is read-only afterwards.
pub struct CommandBus {
    handlers: RwLock<HashMap<CommandKind, Handler>>,
}

impl Default for CommandBus {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandBus {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Register the handler for a command kind.
    pub fn register<F, Fut>(&self, kind: CommandKind, handler: F) -> Result<(), RegistrationConflict>
    where
        F: Fn(Command) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), PipelineError>> + Send + 'static,
    {
        let mut handlers = self.handlers.write().unwrap();
        if handlers.contains_key(&kind) {
            return Err(RegistrationConflict(kind));
        }
        let handler: Handler = Arc::new(move |command| Box::pin(handler(command)));
        handlers.insert(kind, handler);
        log::debug!("registered handler for {}", kind.as_str());
        Ok(())
    }

    /// Execute a command through its registered handler.
    pub async fn execute(&self, command: Command) -> Result<(), PipelineError> {
        let kind = command.kind();
        log::debug!("executing {}", kind.as_str());

        let handler = self
            .handlers
            .read()
            .unwrap()
            .get(&kind)
            .cloned()
            .ok_or(PipelineError::NoHandler(kind))?;

        handler(command).await.map_err(|e| {
            log::error!("handler for {} failed: {}", kind.as_str(), e);
            e
        })
    }

    /// Kinds with a registered handler.
    pub fn registered_kinds(&self) -> Vec<CommandKind> {
        self.handlers.read().unwrap().keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::super::command::QueryMatches;
    use super::*;

    fn query_command(text: &str) -> Command {
        QueryMatches::new(text, 1, 2, 3).unwrap().into()
    }

    #[tokio::test]
    async fn executes_the_registered_handler() {
        let bus = CommandBus::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        bus.register(CommandKind::QueryMatches, move |_| {
            let calls = Arc::clone(&calls_clone);
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        })
        .unwrap();

        bus.execute(query_command("hello")).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn duplicate_registration_fails_and_keeps_the_first_handler() {
        let bus = CommandBus::new();
        let first_calls = Arc::new(AtomicUsize::new(0));
        let first_clone = Arc::clone(&first_calls);
        bus.register(CommandKind::QueryMatches, move |_| {
            let calls = Arc::clone(&first_clone);
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        })
        .unwrap();

        let err = bus
            .register(CommandKind::QueryMatches, |_| async {
                panic!("second handler must never be bound")
            })
            .unwrap_err();
        assert_eq!(err, RegistrationConflict(CommandKind::QueryMatches));

        bus.execute(query_command("still routed to the first"))
            .await
            .unwrap();
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unknown_kind_is_unroutable() {
        let bus = CommandBus::new();
        let err = bus.execute(query_command("nobody home")).await.unwrap_err();
        assert!(matches!(
            err,
            PipelineError::NoHandler(CommandKind::QueryMatches)
        ));
    }

    #[tokio::test]
    async fn handler_errors_propagate_unmodified() {
        let bus = CommandBus::new();
        bus.register(CommandKind::QueryMatches, |_| async {
            Err(PipelineError::Internal("deliberate".into()))
        })
        .unwrap();

        let err = bus.execute(query_command("boom")).await.unwrap_err();
        assert!(matches!(err, PipelineError::Internal(msg) if msg == "deliberate"));
    }
}
