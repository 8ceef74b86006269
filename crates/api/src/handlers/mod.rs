pub mod meals;

use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

/// Fallback for any route that does not exist.
pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Unable to find the requested page or resource.",
            "code": "NOT_FOUND",
        })),
    )
}
