//! Fan-out dispatcher for pipeline events.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, RwLock};

use crate::error::PipelineError;

use super::events::{Event, EventKind};

type SubscriberFuture = Pin<Box<dyn Future<Output = Result<(), PipelineError>> + Send>>;
type Subscriber = Arc<dyn Fn(Event) -> SubscriberFuture + Send + Sync>;

/// Broadcasts events to every subscriber registered for their kind.
///
/// Unlike commands, events fan out: zero, one, or many subscribers per
/// kind, invoked in subscription order. A failing subscriber is logged
/// and the next one still runs — one bad reactor never blocks the
/// others, and `emit` itself never fails.
///
/// Built once at startup and shared via `Arc`; the interior lock exists
/// so reactors can hold a handle back to the dispatcher they are
/// registered on, not for steady-state mutation.
pub struct EventDispatcher {
    subscribers: RwLock<HashMap<EventKind, Vec<Subscriber>>>,
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(HashMap::new()),
        }
    }

    /// Subscribe a handler to an event kind. Handlers are uniformly
    /// asynchronous; wrap synchronous work in an `async` block.
    pub fn subscribe<F, Fut>(&self, kind: EventKind, subscriber: F)
    where
        F: Fn(Event) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), PipelineError>> + Send + 'static,
    {
        let subscriber: Subscriber = Arc::new(move |event| Box::pin(subscriber(event)));
        self.subscribers
            .write()
            .unwrap()
            .entry(kind)
            .or_default()
            .push(subscriber);
        log::debug!("subscribed handler to {}", kind.as_str());
    }

    /// Broadcast an event to its subscribers, in subscription order.
    pub async fn emit(&self, event: Event) {
        let kind = event.kind();
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .read()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_default();

        if subscribers.is_empty() {
            log::debug!("no subscribers for {}", kind.as_str());
            return;
        }

        log::debug!(
            "emitting {} to {} subscriber(s)",
            kind.as_str(),
            subscribers.len()
        );
        for subscriber in subscribers {
            if let Err(e) = subscriber(event.clone()).await {
                log::error!("subscriber for {} failed: {}", kind.as_str(), e);
            }
        }
    }

    /// Number of subscribers for a kind.
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers
            .read()
            .unwrap()
            .get(&kind)
            .map_or(0, Vec::len)
    }
}
