//! Route definitions for meals.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::meals;
use crate::state::AppState;

/// Meal routes mounted at `/meals`.
///
/// ```text
/// GET    /            -> list_meals
/// POST   /            -> share_meal (multipart)
/// GET    /{slug}      -> get_meal
/// ```
///
/// Request bodies are capped at `max_upload_bytes` so the image upload fits.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", get(meals::list_meals).post(meals::share_meal))
        .route("/{slug}", get(meals::get_meal))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
