use std::sync::Arc;

use crate::auth::jwt::AuthConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: marquee_db::DbPool,
    /// Token verification keys. `None` for services without gated routes.
    pub auth: Option<Arc<AuthConfig>>,
}
