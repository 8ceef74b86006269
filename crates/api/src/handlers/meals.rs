//! Handlers for the `/meals` resource.

use std::time::Duration;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use mealshare_core::error::CoreError;
use mealshare_core::meal::{ImageUpload, MealForm};
use mealshare_db::models::meal::MealDetail;
use mealshare_db::repositories::MealRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, ShareFormState};
use crate::sharing::{self, ShareOutcome};
use crate::state::AppState;

/// GET /api/v1/meals
///
/// List every meal in insertion order. Waits `listing_delay_ms` first.
pub async fn list_meals(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    if state.config.listing_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.listing_delay_ms)).await;
    }

    let meals = MealRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: meals }))
}

/// GET /api/v1/meals/{slug}
pub async fn get_meal(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let meal = MealRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Meal",
                key: format!("slug '{slug}'"),
            })
        })?;

    Ok(Json(DataResponse {
        data: MealDetail::from(meal),
    }))
}

/// POST /api/v1/meals
///
/// Accepts the multipart share form (`name`, `email`, `title`, `summary`,
/// `instructions`, `image`). Redirects to the listing route on success and
/// answers 422 with a [`ShareFormState`] message on invalid input.
pub async fn share_meal(State(state): State<AppState>, multipart: Multipart) -> AppResult<Response> {
    let form = read_meal_form(multipart).await?;

    match sharing::share_meal(&state, form).await? {
        ShareOutcome::Rejected { message } => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ShareFormState {
                message: Some(message),
            }),
        )
            .into_response()),
        ShareOutcome::Shared(_) => Ok(Redirect::to(&state.config.listing_route).into_response()),
    }
}

/// Collect the share form fields into a typed [`MealForm`].
///
/// Unknown fields are ignored; a repeated field keeps its last value.
async fn read_meal_form(mut multipart: Multipart) -> AppResult<MealForm> {
    let mut form = MealForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "image" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let bytes = field.bytes().await?;
                form.image = Some(ImageUpload {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
            "title" | "summary" | "instructions" | "name" | "email" => {
                let text = field.text().await?;
                let slot = match name.as_str() {
                    "title" => &mut form.title,
                    "summary" => &mut form.summary,
                    "instructions" => &mut form.instructions,
                    "name" => &mut form.name,
                    _ => &mut form.email,
                };
                *slot = Some(text);
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(form)
}
