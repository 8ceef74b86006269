//! Meal sharing: the one data-mutating flow of the site.
//!
//! [`share_meal`] validates a [`MealForm`], derives the slug and sanitized
//! instructions, writes the image, inserts the row and publishes the
//! revalidation event, in that order. Validation failures come back as
//! [`ShareOutcome::Rejected`] with nothing written; storage failures are
//! errors.

use mealshare_core::error::CoreError;
use mealshare_core::meal::MealForm;
use mealshare_core::sanitize::sanitize_instructions;
use mealshare_db::models::meal::{CreateMeal, Meal};
use mealshare_db::repositories::MealRepo;
use mealshare_events::SiteEvent;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Result of a share attempt that did not hit a storage failure.
#[derive(Debug)]
pub enum ShareOutcome {
    /// The form was invalid; nothing was stored.
    Rejected { message: String },
    /// The meal was stored and the revalidation event published.
    Shared(Meal),
}

/// Validate and persist a shared meal.
///
/// Slug collisions are rejected with [`CoreError::Conflict`] before any
/// write. If the row insert fails after the image was written, the image is
/// removed again so no orphan file is left behind.
pub async fn share_meal(state: &AppState, form: MealForm) -> AppResult<ShareOutcome> {
    let submission = match form.validate() {
        Ok(submission) => submission,
        Err(CoreError::Validation(message)) => {
            tracing::info!(%message, "Meal submission rejected");
            return Ok(ShareOutcome::Rejected { message });
        }
        Err(other) => return Err(other.into()),
    };
    let slug = submission.slug;

    if MealRepo::find_by_slug(&state.pool, &slug).await?.is_some() {
        return Err(CoreError::Conflict(format!(
            "A meal with the slug '{slug}' already exists. Please choose a different title."
        ))
        .into());
    }

    let instructions = sanitize_instructions(&submission.instructions);

    let image = state
        .image_store
        .save(&slug, &submission.image_extension, &submission.image_bytes)
        .await?;

    let input = CreateMeal {
        slug,
        title: submission.title,
        summary: submission.summary,
        instructions,
        creator: submission.creator,
        creator_email: submission.creator_email,
        image,
    };

    let meal = match MealRepo::insert(&state.pool, &input).await {
        Ok(meal) => meal,
        Err(err) => {
            if let Err(cleanup) = state.image_store.remove(&input.image).await {
                tracing::warn!(
                    image = %input.image,
                    error = %cleanup,
                    "Failed to remove image after insert failure"
                );
            }
            return Err(AppError::Database(err));
        }
    };

    tracing::info!(meal_id = meal.id, slug = %meal.slug, image = %meal.image, "Meal shared");
    state.event_bus.publish(SiteEvent::meal_shared(meal.slug.clone()));

    Ok(ShareOutcome::Shared(meal))
}
