use std::sync::Arc;

use mealshare_core::image_store::ImageStore;
use mealshare_events::EventBus;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, opened at startup and closed at shutdown.
    pub pool: mealshare_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Where uploaded meal images are written.
    pub image_store: Arc<ImageStore>,
    /// Site event bus; carries revalidation signals after a meal is shared.
    pub event_bus: Arc<EventBus>,
}

impl AppState {
    /// Assemble state from a pool and config, deriving the image store from
    /// `config.public_dir`.
    pub fn new(pool: mealshare_db::DbPool, config: ServerConfig, event_bus: Arc<EventBus>) -> Self {
        let image_store = Arc::new(ImageStore::new(&config.public_dir));
        Self {
            pool,
            config: Arc::new(config),
            image_store,
            event_bus,
        }
    }
}
