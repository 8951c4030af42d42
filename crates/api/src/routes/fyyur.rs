//! Fyyur: venues, artists and the shows that connect them.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{artist, show, venue};
use crate::state::AppState;

/// ```text
/// GET    /venues                -> venue::list (grouped by area)
/// POST   /venues                -> venue::create
/// POST   /venues/search         -> venue::search
/// GET    /venues/{id}           -> venue::get_by_id
/// PATCH  /venues/{id}           -> venue::update
/// DELETE /venues/{id}           -> venue::delete
///
/// GET    /artists               -> artist::list
/// POST   /artists               -> artist::create
/// POST   /artists/search        -> artist::search
/// GET    /artists/{id}          -> artist::get_by_id
/// PATCH  /artists/{id}          -> artist::update
/// DELETE /artists/{id}          -> artist::delete
///
/// GET    /shows                 -> show::list
/// POST   /shows                 -> show::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/venues", get(venue::list).post(venue::create))
        .route("/venues/search", post(venue::search))
        .route(
            "/venues/{id}",
            get(venue::get_by_id)
                .patch(venue::update)
                .delete(venue::delete),
        )
        .route("/artists", get(artist::list).post(artist::create))
        .route("/artists/search", post(artist::search))
        .route(
            "/artists/{id}",
            get(artist::get_by_id)
                .patch(artist::update)
                .delete(artist::delete),
        )
        .route("/shows", get(show::list).post(show::create))
}
