//! Handlers for the `/venues` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use marquee_core::areas::{group_by_area, Area};
use marquee_core::error::CoreError;
use marquee_core::search::contains_pattern;
use marquee_core::types::DbId;
use marquee_core::validation;
use marquee_db::models::show::{ShowTiming, VenueShow};
use marquee_db::models::venue::{CreateVenue, UpdateVenue, Venue};
use marquee_db::repositories::{ShowRepo, VenueRepo};
use serde::Serialize;

use super::{Deleted, SearchForm, SearchResults};
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::{ok, Success};
use crate::state::AppState;

/// A venue inside an area of the listing.
#[derive(Debug, Serialize)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

#[derive(Debug, Serialize)]
pub struct AreaList {
    pub areas: Vec<Area<VenueSummary>>,
}

/// Venue page: the row plus its shows split around the database clock.
#[derive(Debug, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Serialize)]
pub struct VenueBody<T> {
    pub venue: T,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Venue", id })
}

/// GET /venues
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Success<AreaList>>> {
    let rows = VenueRepo::list_with_upcoming(&state.pool).await?;
    let areas = group_by_area(rows.into_iter().map(|row| {
        let summary = VenueSummary {
            id: row.id,
            name: row.name,
            num_upcoming_shows: row.num_upcoming_shows,
        };
        (row.city, row.state, summary)
    }));
    Ok(ok(AreaList { areas }))
}

/// POST /venues/search
pub async fn search(
    State(state): State<AppState>,
    AppJson(form): AppJson<SearchForm>,
) -> AppResult<Json<Success<SearchResults>>> {
    let pattern = contains_pattern(&form.search_term);
    let hits = VenueRepo::search_by_name(&state.pool, &pattern).await?;
    Ok(ok(SearchResults::from(hits)))
}

/// GET /venues/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Success<VenueBody<VenueDetail>>>> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let past_shows = ShowRepo::list_for_venue(&state.pool, id, ShowTiming::Past).await?;
    let upcoming_shows = ShowRepo::list_for_venue(&state.pool, id, ShowTiming::Upcoming).await?;

    Ok(ok(VenueBody {
        venue: VenueDetail {
            venue,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        },
    }))
}

/// POST /venues
pub async fn create(
    State(state): State<AppState>,
    AppJson(mut input): AppJson<CreateVenue>,
) -> AppResult<(StatusCode, Json<Success<VenueBody<Venue>>>)> {
    input.name = validation::non_blank("name", &input.name)?.to_string();
    let venue = VenueRepo::create(&state.pool, &input).await?;
    tracing::info!(venue_id = venue.id, name = %venue.name, "Venue listed");
    Ok((StatusCode::CREATED, ok(VenueBody { venue })))
}

/// PATCH /venues/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(mut input): AppJson<UpdateVenue>,
) -> AppResult<Json<Success<VenueBody<Venue>>>> {
    input.name = validation::optional_text("name", input.name.take())?;
    let venue = VenueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(ok(VenueBody { venue }))
}

/// DELETE /venues/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Success<Deleted>>> {
    if VenueRepo::delete(&state.pool, id).await? {
        tracing::info!(venue_id = id, "Venue deleted");
        Ok(ok(Deleted { deleted: id }))
    } else {
        Err(not_found(id))
    }
}
