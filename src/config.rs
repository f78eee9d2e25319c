//! Environment-driven configuration.

use std::env;
use std::error::Error;
use std::fmt;

/// A required environment variable was absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingVar(pub &'static str);

impl fmt::Display for MissingVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required environment variable {}", self.0)
    }
}

impl Error for MissingVar {}

/// Connection settings for the model-serving capability.
#[derive(Clone, Debug)]
pub struct TranslatorConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl TranslatorConfig {
    pub const DEFAULT_MODEL: &'static str = "gemini-2.5-flash";
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com";

    /// Config with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: Self::DEFAULT_MODEL.to_string(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read `GEMINI_API_KEY` (required), `GEMINI_MODEL` and
    /// `GEMINI_BASE_URL` (optional) from the environment.
    pub fn from_env() -> Result<Self, MissingVar> {
        let api_key = env::var("GEMINI_API_KEY").map_err(|_| MissingVar("GEMINI_API_KEY"))?;
        let mut config = Self::new(api_key);
        if let Ok(model) = env::var("GEMINI_MODEL") {
            config.model = model;
        }
        if let Ok(base_url) = env::var("GEMINI_BASE_URL") {
            config.base_url = base_url;
        }
        Ok(config)
    }
}
