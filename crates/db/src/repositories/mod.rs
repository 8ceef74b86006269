//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&DbPool` as the first argument.

pub mod meal_repo;

pub use meal_repo::MealRepo;
