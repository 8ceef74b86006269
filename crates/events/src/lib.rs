//! Mealshare site events.
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`SiteEvent`] — a domain event plus the page paths whose cached
//!   renderings it invalidates.
//! - [`RevalidationLog`] — background subscriber that records every
//!   revalidation request.

pub mod bus;
pub mod revalidation;

pub use bus::{EventBus, RevalidateScope, SiteEvent};
pub use revalidation::RevalidationLog;
