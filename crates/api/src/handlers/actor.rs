//! Handlers for the casting `/actors` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use marquee_core::validation;
use marquee_db::models::actor::{Actor, CreateActor, UpdateActor};
use marquee_db::repositories::{ActorRepo, MovieRepo};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::Deleted;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::permission::{
    DeleteActors, PatchActors, PostActors, RequirePermission, ViewActors,
};
use crate::response::{ok, Success};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ActorForm {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub movie_id: Option<DbId>,
}

impl ActorForm {
    fn validate(self) -> Result<CreateActor, CoreError> {
        let age = validation::required("age", self.age)?;
        validation::positive("age", i64::from(age))?;
        Ok(CreateActor {
            name: validation::required_text("name", self.name)?,
            age,
            gender: validation::required_text("gender", self.gender)?,
            movie_id: validation::positive(
                "movie_id",
                validation::required("movie_id", self.movie_id)?,
            )?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ActorList {
    pub actors: Vec<Actor>,
}

#[derive(Debug, Serialize)]
pub struct ActorBody {
    pub actor: Actor,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Actor", id })
}

/// An actor must be cast in a movie that exists.
async fn ensure_movie(pool: &PgPool, movie_id: DbId) -> AppResult<()> {
    if MovieRepo::exists(pool, movie_id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(format!(
            "movie {movie_id} does not exist"
        ))))
    }
}

/// GET /actors
pub async fn list(
    _: RequirePermission<ViewActors>,
    State(state): State<AppState>,
) -> AppResult<Json<Success<ActorList>>> {
    let actors = ActorRepo::list(&state.pool).await?;
    if actors.is_empty() {
        return Err(AppError::Core(CoreError::NothingFound("actors")));
    }
    Ok(ok(ActorList { actors }))
}

/// GET /actors/{id}
pub async fn get_by_id(
    _: RequirePermission<ViewActors>,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Success<ActorBody>>> {
    let actor = ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(ok(ActorBody { actor }))
}

/// POST /actors
pub async fn create(
    RequirePermission(claims, _): RequirePermission<PostActors>,
    State(state): State<AppState>,
    AppJson(form): AppJson<ActorForm>,
) -> AppResult<(StatusCode, Json<Success<ActorBody>>)> {
    let input = form.validate()?;
    ensure_movie(&state.pool, input.movie_id).await?;
    let actor = ActorRepo::create(&state.pool, &input).await?;
    tracing::info!(
        actor_id = actor.id,
        movie_id = actor.movie_id,
        sub = %claims.sub,
        "Actor cast"
    );
    Ok((StatusCode::CREATED, ok(ActorBody { actor })))
}

/// PATCH /actors/{id}
pub async fn update(
    _: RequirePermission<PatchActors>,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(mut input): AppJson<UpdateActor>,
) -> AppResult<Json<Success<ActorBody>>> {
    input.name = validation::optional_text("name", input.name.take())?;
    input.gender = validation::optional_text("gender", input.gender.take())?;
    if let Some(age) = input.age {
        validation::positive("age", i64::from(age))?;
    }
    if let Some(movie_id) = input.movie_id {
        if ActorRepo::find_by_id(&state.pool, id).await?.is_none() {
            return Err(not_found(id));
        }
        ensure_movie(&state.pool, movie_id).await?;
    }

    let actor = ActorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(ok(ActorBody { actor }))
}

/// DELETE /actors/{id}
pub async fn delete(
    RequirePermission(claims, _): RequirePermission<DeleteActors>,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Success<Deleted>>> {
    if ActorRepo::delete(&state.pool, id).await? {
        tracing::info!(actor_id = id, sub = %claims.sub, "Actor deleted");
        Ok(ok(Deleted { deleted: id }))
    } else {
        Err(not_found(id))
    }
}
