//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?page=N` for the trivia question listings. Pages start at 1.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}
