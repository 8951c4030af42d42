//! Handlers for the `/shows` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use marquee_core::validation;
use marquee_db::models::show::{CreateShow, Show, ShowListing};
use marquee_db::repositories::ShowRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::{ok, Success};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ShowList {
    pub shows: Vec<ShowListing>,
}

#[derive(Debug, Serialize)]
pub struct ShowBody {
    pub show: Show,
}

/// GET /shows
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Success<ShowList>>> {
    let shows = ShowRepo::list(&state.pool).await?;
    Ok(ok(ShowList { shows }))
}

/// POST /shows
///
/// Unknown venue or artist ids surface as foreign-key violations (422).
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateShow>,
) -> AppResult<(StatusCode, Json<Success<ShowBody>>)> {
    validation::positive("venue_id", input.venue_id)?;
    validation::positive("artist_id", input.artist_id)?;
    let show = ShowRepo::create(&state.pool, &input).await?;
    tracing::info!(
        show_id = show.id,
        venue_id = show.venue_id,
        artist_id = show.artist_id,
        "Show booked"
    );
    Ok((StatusCode::CREATED, ok(ShowBody { show })))
}
