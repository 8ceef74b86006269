pub mod health;
pub mod meals;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /meals                 list, share (multipart)
/// /meals/{slug}          detail
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new().nest("/meals", meals::router(config.max_upload_bytes))
}
