//! Mealshare domain core.
//!
//! Pure building blocks shared by the repository and API layers: slug
//! generation, instruction sanitizing, submission validation and the
//! on-disk image store.

pub mod error;
pub mod image_store;
pub mod meal;
pub mod sanitize;
pub mod slug;
pub mod types;
