//! Revalidation log service.
//!
//! [`RevalidationLog`] subscribes to the [`EventBus`](crate::bus::EventBus)
//! and records every path an event marks as stale. It runs as a long-lived
//! background task and shuts down when the bus sender is dropped.

use tokio::sync::broadcast;

use crate::bus::SiteEvent;

/// Background service that logs revalidation requests.
pub struct RevalidationLog;

impl RevalidationLog {
    /// Run the log loop until the channel closes.
    ///
    /// Returns the number of events seen, which is mostly useful in tests.
    pub async fn run(mut receiver: broadcast::Receiver<SiteEvent>) -> u64 {
        let mut seen = 0;
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    seen += 1;
                    for (path, scope) in &event.revalidate {
                        tracing::info!(
                            event_type = %event.event_type,
                            meal_slug = event.meal_slug.as_deref().unwrap_or(""),
                            path = %path,
                            scope = ?scope,
                            "Revalidating cached path"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Revalidation log lagged, some events were skipped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, revalidation log shutting down");
                    break;
                }
            }
        }
        seen
    }
}
