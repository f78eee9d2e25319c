//! Validation error type shared by every schema check.

use std::error::Error;
use std::fmt;

/// A field failed a range, shape, or cross-field check.
///
/// Always names the offending field so callers can surface it without
/// digging through nested structures. Container types prefix the field
/// path as the error bubbles up (`scoreboard.friendly_score`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the field that failed.
    pub field: String,
    /// What constraint was violated.
    pub message: String,
}

impl ValidationError {
    /// Create a validation error for the given field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Prefix the field path with a parent segment.
    pub fn prefixed(mut self, prefix: &str) -> Self {
        self.field = format!("{}.{}", prefix, self.field);
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl Error for ValidationError {}

/// Pure validation over an already-constructed value.
///
/// Implementations must be side-effect free; a failed check reports the
/// first offending field rather than collecting all of them.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_builds_dotted_path() {
        let err = ValidationError::new("friendly_score", "must be at most 6").prefixed("scoreboard");
        assert_eq!(err.field, "scoreboard.friendly_score");
        assert_eq!(
            err.to_string(),
            "invalid scoreboard.friendly_score: must be at most 6"
        );
    }
}
