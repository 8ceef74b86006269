//! Repository for the `meals` table.
//!
//! Meals are insert-only: there is no update or delete.

use crate::models::meal::{CreateMeal, Meal};
use crate::DbPool;

/// Column list for meals queries.
const COLUMNS: &str = "id, slug, title, summary, instructions, creator, \
    creator_email, image, created_at";

/// Provides read and insert operations for meals.
pub struct MealRepo;

impl MealRepo {
    /// List every meal in insertion order.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Meal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meals ORDER BY id ASC");
        sqlx::query_as::<_, Meal>(&query).fetch_all(pool).await
    }

    /// Find a meal by slug.
    pub async fn find_by_slug(pool: &DbPool, slug: &str) -> Result<Option<Meal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meals WHERE slug = ?");
        sqlx::query_as::<_, Meal>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new meal, returning the stored row.
    ///
    /// A duplicate slug fails with a unique violation on `uq_meals_slug`.
    pub async fn insert(pool: &DbPool, input: &CreateMeal) -> Result<Meal, sqlx::Error> {
        let query = format!(
            "INSERT INTO meals
                (title, summary, instructions, creator, creator_email, image, slug)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Meal>(&query)
            .bind(&input.title)
            .bind(&input.summary)
            .bind(&input.instructions)
            .bind(&input.creator)
            .bind(&input.creator_email)
            .bind(&input.image)
            .bind(&input.slug)
            .fetch_one(pool)
            .await
    }

    /// Number of stored meals.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM meals")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
