//! Shared response envelope types for API handlers.
//!
//! Reads use a `{ "data": ... }` envelope; the share form answers with its
//! own [`ShareFormState`] payload so a client can re-render the form.

use serde::{Deserialize, Serialize};

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: meals }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// State of the share form between submissions.
///
/// `message` is `None` before the first submission and carries the
/// validation message after a rejected one.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareFormState {
    pub message: Option<String>,
}
