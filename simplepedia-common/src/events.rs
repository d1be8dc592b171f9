//! Event types for the Simplepedia event bus
//!
//! Events are broadcast to every SSE client so open browsers can refresh
//! their section list, title list or article view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::models::{ArticleId, Section};

/// Simplepedia event types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PediaEvent {
    /// The collection snapshot was replaced
    CollectionChanged {
        article_count: usize,
        timestamp: DateTime<Utc>,
    },

    /// An article was created or edited
    ArticleSaved {
        article_id: ArticleId,
        /// True for add, false for edit
        created: bool,
        timestamp: DateTime<Utc>,
    },

    /// The current section or article changed
    SelectionChanged {
        section: Option<Section>,
        article_id: Option<ArticleId>,
        timestamp: DateTime<Utc>,
    },
}

impl PediaEvent {
    /// Name used for the SSE `event:` field
    pub fn event_type(&self) -> &'static str {
        match self {
            PediaEvent::CollectionChanged { .. } => "CollectionChanged",
            PediaEvent::ArticleSaved { .. } => "ArticleSaved",
            PediaEvent::SelectionChanged { .. } => "SelectionChanged",
        }
    }
}

/// Central event distribution bus
///
/// Wraps `tokio::sync::broadcast`: publishing never blocks, slow
/// subscribers see a lag error instead of stalling the writer.
///
/// # Examples
///
/// ```
/// use simplepedia_common::events::{EventBus, PediaEvent};
///
/// let bus = EventBus::new(100);
/// let mut rx = bus.subscribe();
///
/// bus.emit(PediaEvent::CollectionChanged {
///     article_count: 3,
///     timestamp: chrono::Utc::now(),
/// }).ok();
///
/// assert!(rx.try_recv().is_ok());
/// ```
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<PediaEvent>,
}

impl EventBus {
    /// Creates a new EventBus buffering up to `capacity` events per subscriber
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to all future events
    pub fn subscribe(&self) -> broadcast::Receiver<PediaEvent> {
        self.tx.subscribe()
    }

    /// Emit an event to all subscribers
    ///
    /// Returns `Ok(subscriber_count)`, or `Err` when nobody is listening.
    pub fn emit(
        &self,
        event: PediaEvent,
    ) -> Result<usize, broadcast::error::SendError<PediaEvent>> {
        self.tx.send(event)
    }

    /// Emit and ignore the no-subscriber case
    pub fn emit_lossy(&self, event: PediaEvent) {
        let _ = self.tx.send(event);
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
