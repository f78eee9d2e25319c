//! Per-request error umbrella for handlers and reactors.

use std::error::Error;
use std::fmt;

use crate::bus::CommandKind;
use crate::chat::ChatError;
use crate::schema::ValidationError;
use crate::store::StoreError;
use crate::translator::TranslatorError;

/// Everything that can stop a request's chain.
///
/// Validation failures are local and final; capability failures
/// short-circuit the rest of the chain for that request; `NoHandler` is
/// a wiring bug that should never survive startup testing. Whatever the
/// variant, its display form is short and safe to show a user.
#[derive(Debug)]
pub enum PipelineError {
    Validation(ValidationError),
    Translator(TranslatorError),
    Store(StoreError),
    Chat(ChatError),
    /// No handler registered for the command's kind.
    NoHandler(CommandKind),
    /// A wiring invariant broke (e.g. a command routed to the wrong
    /// handler). Not user-recoverable.
    Internal(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Validation(e) => write!(f, "{}", e),
            PipelineError::Translator(e) => write!(f, "{}", e),
            PipelineError::Store(e) => write!(f, "{}", e),
            PipelineError::Chat(e) => write!(f, "{}", e),
            PipelineError::NoHandler(kind) => {
                write!(f, "no handler registered for {}", kind.as_str())
            }
            PipelineError::Internal(msg) => write!(f, "internal pipeline error: {}", msg),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Validation(e) => Some(e),
            PipelineError::Translator(e) => Some(e),
            PipelineError::Store(e) => Some(e),
            PipelineError::Chat(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for PipelineError {
    fn from(err: ValidationError) -> Self {
        PipelineError::Validation(err)
    }
}

impl From<TranslatorError> for PipelineError {
    fn from(err: TranslatorError) -> Self {
        PipelineError::Translator(err)
    }
}

impl From<StoreError> for PipelineError {
    fn from(err: StoreError) -> Self {
        PipelineError::Store(err)
    }
}

impl From<ChatError> for PipelineError {
    fn from(err: ChatError) -> Self {
        PipelineError::Chat(err)
    }
}
