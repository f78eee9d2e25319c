//! Chat surface: the outbound reply seam plus inbound attachment rules.
//!
//! The core never talks to a chat platform directly. Replies go through
//! [`ChatSurface`]; the attachment checks and message formats here are
//! what any inbound adapter is expected to apply before and after the
//! pipeline runs.

mod attachments;
mod format;

use async_trait::async_trait;

use std::error::Error;
use std::fmt;

pub use attachments::{check_attachments, AttachmentError, MAX_ATTACHMENTS, MAX_ATTACHMENT_BYTES};
pub use format::{format_error, format_match_saved, format_query_result};

/// Error type for reply delivery.
#[derive(Debug)]
pub enum ChatError {
    /// The destination channel could not be resolved.
    UnknownChannel(u64),
    /// Delivery failed after the channel was resolved.
    Undeliverable(String),
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::UnknownChannel(id) => write!(f, "channel {} could not be found", id),
            ChatError::Undeliverable(msg) => write!(f, "reply delivery failed: {}", msg),
        }
    }
}

impl Error for ChatError {}

/// Delivers formatted text replies back to the requesting channel.
#[async_trait]
pub trait ChatSurface: Send + Sync {
    async fn send(&self, channel_id: u64, text: &str) -> Result<(), ChatError>;
}
