//! Meal entity and DTOs.

use mealshare_core::sanitize::render_line_breaks;
use mealshare_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `meals` table.
#[derive(Debug, Clone, FromRow, Serialize, PartialEq)]
pub struct Meal {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub summary: String,
    /// Sanitized, safe to render as HTML.
    pub instructions: String,
    pub creator: String,
    pub creator_email: String,
    /// Public path, e.g. `/images/juicy-cheese-burger.jpg`.
    pub image: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a new meal. All text is final (sanitized, trimmed).
#[derive(Debug, Clone)]
pub struct CreateMeal {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub instructions: String,
    pub creator: String,
    pub creator_email: String,
    pub image: String,
}

/// Detail view of a meal with instructions ready for HTML display.
#[derive(Debug, Serialize)]
pub struct MealDetail {
    #[serde(flatten)]
    pub meal: Meal,
    /// `instructions` with line breaks rendered as `<br />`.
    pub instructions_html: String,
}

impl From<Meal> for MealDetail {
    fn from(meal: Meal) -> Self {
        let instructions_html = render_line_breaks(&meal.instructions);
        Self {
            meal,
            instructions_html,
        }
    }
}
