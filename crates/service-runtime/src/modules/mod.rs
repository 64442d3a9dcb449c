//! # Demo Modules
//!
//! Feature modules wired by the composition root. Each module contributes
//! its routes under the `"RouteHandler"` capability and reads and writes
//! its own collection through the shared store adapter; modules never
//! reference each other or the exposure.

pub mod orders;
pub mod users;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::fmt::Display;

/// Map a storage-layer failure onto a 500 response.
fn storage_error(err: impl Display) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": err.to_string() })),
    )
        .into_response()
}
