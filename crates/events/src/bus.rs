//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`SiteEvent`]s. It is
//! shared via `Arc<EventBus>` across the application; the presentation
//! layer (or anything else caching rendered pages) subscribes to learn
//! which paths to revalidate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Event name published after a meal is stored.
pub const MEAL_SHARED: &str = "meal.shared";

// ---------------------------------------------------------------------------
// SiteEvent
// ---------------------------------------------------------------------------

/// How far below a path a revalidation reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevalidateScope {
    /// Only the page at exactly this path.
    Page,
    /// The path and every page nested under it.
    Layout,
}

/// A domain event that occurred on the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteEvent {
    /// Dot-separated event name, e.g. `"meal.shared"`.
    pub event_type: String,

    /// Slug of the meal the event is about, if any.
    pub meal_slug: Option<String>,

    /// Paths whose cached renderings are stale after this event.
    pub revalidate: Vec<(String, RevalidateScope)>,

    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl SiteEvent {
    /// Create a new event with only the required `event_type`.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            meal_slug: None,
            revalidate: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    /// The event announcing a newly shared meal; invalidates the whole site
    /// layout so listings pick up the new entry.
    pub fn meal_shared(slug: impl Into<String>) -> Self {
        Self::new(MEAL_SHARED)
            .with_meal(slug)
            .with_revalidate("/", RevalidateScope::Layout)
    }

    /// Attach the meal the event is about.
    pub fn with_meal(mut self, slug: impl Into<String>) -> Self {
        self.meal_slug = Some(slug.into());
        self
    }

    /// Mark `path` as needing revalidation.
    pub fn with_revalidate(mut self, path: impl Into<String>, scope: RevalidateScope) -> Self {
        self.revalidate.push((path.into(), scope));
        self
    }

    /// Whether this event makes the cached rendering of `path` stale.
    pub fn invalidates(&self, path: &str) -> bool {
        self.revalidate.iter().any(|(target, scope)| match scope {
            RevalidateScope::Page => target == path,
            RevalidateScope::Layout => {
                let prefix = target.trim_end_matches('/');
                path == target
                    || path
                        .strip_prefix(prefix)
                        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
            }
        })
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out event bus.
///
/// ```rust
/// use mealshare_events::bus::{EventBus, SiteEvent};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(SiteEvent::meal_shared("pancakes"));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<SiteEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped.
    pub fn publish(&self, event: SiteEvent) {
        // A SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<SiteEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
