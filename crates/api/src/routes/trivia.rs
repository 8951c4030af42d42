use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{category, question, quiz};
use crate::state::AppState;

/// ```text
/// GET    /categories                  -> category::list
/// GET    /categories/{id}/questions   -> category::questions (?page=N)
///
/// GET    /questions                   -> question::list (?page=N)
/// POST   /questions                   -> question::create_or_search
/// POST   /questions/search            -> question::search (?page=N)
/// DELETE /questions/{id}              -> question::delete
///
/// POST   /quizzes                     -> quiz::play
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(category::list))
        .route("/categories/{id}/questions", get(category::questions))
        .route(
            "/questions",
            get(question::list).post(question::create_or_search),
        )
        .route("/questions/search", post(question::search))
        .route("/questions/{id}", delete(question::delete))
        .route("/quizzes", post(quiz::play))
}
