//! Success envelope shared by every handler.
//!
//! Responses are flat: `{"success": true, "venues": [...]}` rather than a
//! nested `data` object, which is what the existing front ends read.

use axum::Json;
use serde::Serialize;

/// `{"success": true, ...body}` response envelope.
///
/// `T` must serialize as a map (a struct or `serde_json::Value::Object`).
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Success<T> {
    pub fn new(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

/// Shorthand for `Json(Success::new(body))`.
pub fn ok<T: Serialize>(body: T) -> Json<Success<T>> {
    Json(Success::new(body))
}
