//! Actor entity model and DTOs.

use marquee_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An actor row from the `actors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub movie_id: DbId,
}

/// DTO for creating a new actor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActor {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub movie_id: DbId,
}

/// DTO for updating an existing actor. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateActor {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub movie_id: Option<DbId>,
}
