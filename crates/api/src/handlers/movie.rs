//! Handlers for the casting `/movies` resource. Every route is gated by a
//! `*:movie` permission.

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use marquee_core::validation;
use marquee_db::models::actor::Actor;
use marquee_db::models::movie::{CreateMovie, Movie, MovieWithActors, UpdateMovie};
use marquee_db::repositories::{ActorRepo, MovieRepo};
use serde::{Deserialize, Serialize};

use super::Deleted;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::permission::{
    DeleteMovies, PatchMovies, PostMovies, RequirePermission, ViewMovies,
};
use crate::response::{ok, Success};
use crate::state::AppState;

/// Create payload. Fields are optional here so that a missing one is a
/// validation error rather than a body rejection.
#[derive(Debug, Deserialize)]
pub struct MovieForm {
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
}

impl MovieForm {
    fn validate(self) -> Result<CreateMovie, CoreError> {
        Ok(CreateMovie {
            title: validation::required_text("title", self.title)?,
            release_date: validation::required("release_date", self.release_date)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct MovieList {
    pub movies: Vec<MovieWithActors>,
}

#[derive(Debug, Serialize)]
pub struct MovieBody<T> {
    pub movie: T,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

/// Attach each movie's cast, preserving movie order.
fn with_cast(movies: Vec<Movie>, actors: Vec<Actor>) -> Vec<MovieWithActors> {
    let mut cast: HashMap<DbId, Vec<Actor>> = HashMap::new();
    for actor in actors {
        cast.entry(actor.movie_id).or_default().push(actor);
    }
    movies
        .into_iter()
        .map(|movie| MovieWithActors {
            actors: cast.remove(&movie.id).unwrap_or_default(),
            movie,
        })
        .collect()
}

/// GET /movies
pub async fn list(
    _: RequirePermission<ViewMovies>,
    State(state): State<AppState>,
) -> AppResult<Json<Success<MovieList>>> {
    let movies = MovieRepo::list(&state.pool).await?;
    if movies.is_empty() {
        return Err(AppError::Core(CoreError::NothingFound("movies")));
    }
    let ids: Vec<DbId> = movies.iter().map(|m| m.id).collect();
    let actors = ActorRepo::list_by_movies(&state.pool, &ids).await?;
    Ok(ok(MovieList {
        movies: with_cast(movies, actors),
    }))
}

/// GET /movies/{id}
pub async fn get_by_id(
    _: RequirePermission<ViewMovies>,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Success<MovieBody<MovieWithActors>>>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let actors = ActorRepo::list_by_movies(&state.pool, &[id]).await?;
    Ok(ok(MovieBody {
        movie: MovieWithActors { movie, actors },
    }))
}

/// POST /movies
pub async fn create(
    RequirePermission(claims, _): RequirePermission<PostMovies>,
    State(state): State<AppState>,
    AppJson(form): AppJson<MovieForm>,
) -> AppResult<(StatusCode, Json<Success<MovieBody<Movie>>>)> {
    let input = form.validate()?;
    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id = movie.id, sub = %claims.sub, "Movie created");
    Ok((StatusCode::CREATED, ok(MovieBody { movie })))
}

/// PATCH /movies/{id}
pub async fn update(
    _: RequirePermission<PatchMovies>,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(mut input): AppJson<UpdateMovie>,
) -> AppResult<Json<Success<MovieBody<Movie>>>> {
    input.title = validation::optional_text("title", input.title.take())?;
    let movie = MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(ok(MovieBody { movie }))
}

/// DELETE /movies/{id}
///
/// The movie's actors are removed with it.
pub async fn delete(
    RequirePermission(claims, _): RequirePermission<DeleteMovies>,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Success<Deleted>>> {
    if !MovieRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(movie_id = id, sub = %claims.sub, "Movie deleted");
    Ok(ok(Deleted { deleted: id }))
}
