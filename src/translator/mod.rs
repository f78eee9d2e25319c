//! Translator contract: the external model-serving capability.
//!
//! Two request/response operations — screenshots to a [`MatchRecord`],
//! natural language to a [`QueryPlan`] — with no local state and no
//! retry policy. Failures surface to the caller; backoff, if any, is the
//! caller's business.

mod gemini;
mod prompts;

use async_trait::async_trait;

use std::error::Error;
use std::fmt;

use crate::schema::{MatchRecord, QueryPlan, ValidationError};

pub use gemini::GeminiTranslator;
pub use prompts::{DB_QUERY_PROMPT, MATCH_ANALYSIS_PROMPT};

/// Error type for translator operations.
#[derive(Debug)]
pub enum TranslatorError {
    /// The model-serving capability could not be reached, timed out, or
    /// answered with a non-success status.
    Unreachable(String),
    /// The capability answered, but not with the JSON payload the
    /// request demanded.
    BadResponse(String),
    /// The payload was well-formed JSON that failed schema validation.
    /// Never coerced or repaired.
    Schema(ValidationError),
}

impl fmt::Display for TranslatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslatorError::Unreachable(msg) => write!(f, "model capability unreachable: {}", msg),
            TranslatorError::BadResponse(msg) => write!(f, "unusable model response: {}", msg),
            TranslatorError::Schema(e) => write!(f, "model response failed validation: {}", e),
        }
    }
}

impl Error for TranslatorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TranslatorError::Schema(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for TranslatorError {
    fn from(err: ValidationError) -> Self {
        TranslatorError::Schema(err)
    }
}

/// Converts raw inputs into validated core types via an external model.
///
/// Both operations await network I/O and must not block other work.
/// Implementations validate before returning; a caller never sees an
/// unvalidated record or plan from this seam.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Extract a match record from one or two scoreboard screenshots.
    async fn extract_match(
        &self,
        image_one: &[u8],
        image_two: Option<&[u8]>,
    ) -> Result<MatchRecord, TranslatorError>;

    /// Translate a natural-language question into an aggregation plan.
    async fn translate_query(&self, question: &str) -> Result<QueryPlan, TranslatorError>;
}
