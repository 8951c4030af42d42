//! Handlers for the `/artists` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::search::contains_pattern;
use marquee_core::types::DbId;
use marquee_core::validation;
use marquee_db::models::artist::{Artist, ArtistRef, CreateArtist, UpdateArtist};
use marquee_db::models::show::{ArtistShow, ShowTiming};
use marquee_db::repositories::{ArtistRepo, ShowRepo};
use serde::Serialize;

use super::{Deleted, SearchForm, SearchResults};
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::{ok, Success};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ArtistList {
    pub artists: Vec<ArtistRef>,
}

#[derive(Debug, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ArtistBody<T> {
    pub artist: T,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Artist",
        id,
    })
}

/// GET /artists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Success<ArtistList>>> {
    let artists = ArtistRepo::list(&state.pool).await?;
    Ok(ok(ArtistList { artists }))
}

/// POST /artists/search
pub async fn search(
    State(state): State<AppState>,
    AppJson(form): AppJson<SearchForm>,
) -> AppResult<Json<Success<SearchResults>>> {
    let pattern = contains_pattern(&form.search_term);
    let hits = ArtistRepo::search_by_name(&state.pool, &pattern).await?;
    Ok(ok(SearchResults::from(hits)))
}

/// GET /artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Success<ArtistBody<ArtistDetail>>>> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let past_shows = ShowRepo::list_for_artist(&state.pool, id, ShowTiming::Past).await?;
    let upcoming_shows = ShowRepo::list_for_artist(&state.pool, id, ShowTiming::Upcoming).await?;

    Ok(ok(ArtistBody {
        artist: ArtistDetail {
            artist,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        },
    }))
}

/// POST /artists
pub async fn create(
    State(state): State<AppState>,
    AppJson(mut input): AppJson<CreateArtist>,
) -> AppResult<(StatusCode, Json<Success<ArtistBody<Artist>>>)> {
    input.name = validation::non_blank("name", &input.name)?.to_string();
    let artist = ArtistRepo::create(&state.pool, &input).await?;
    tracing::info!(artist_id = artist.id, name = %artist.name, "Artist listed");
    Ok((StatusCode::CREATED, ok(ArtistBody { artist })))
}

/// PATCH /artists/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(mut input): AppJson<UpdateArtist>,
) -> AppResult<Json<Success<ArtistBody<Artist>>>> {
    input.name = validation::optional_text("name", input.name.take())?;
    let artist = ArtistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(ok(ArtistBody { artist }))
}

/// DELETE /artists/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Success<Deleted>>> {
    if !ArtistRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(artist_id = id, "Artist deleted");
    Ok(ok(Deleted { deleted: id }))
}
