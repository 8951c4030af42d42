//! Casting: movies and actors, every route permission-gated.

use axum::routing::get;
use axum::Router;

use crate::handlers::{actor, movie};
use crate::state::AppState;

/// ```text
/// GET    /movies          view:movie
/// POST   /movies          post:movie
/// GET    /movies/{id}     view:movie
/// PATCH  /movies/{id}     patch:movie
/// DELETE /movies/{id}     delete:movie
///
/// GET    /actors          view:actor
/// POST   /actors          post:actor
/// GET    /actors/{id}     view:actor
/// PATCH  /actors/{id}     patch:actor
/// DELETE /actors/{id}     delete:actor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movie::list).post(movie::create))
        .route(
            "/movies/{id}",
            get(movie::get_by_id)
                .patch(movie::update)
                .delete(movie::delete),
        )
        .route("/actors", get(actor::list).post(actor::create))
        .route(
            "/actors/{id}",
            get(actor::get_by_id)
                .patch(actor::update)
                .delete(actor::delete),
        )
}
