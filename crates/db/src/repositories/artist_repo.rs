//! Repository for the `artists` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::artist::{Artist, ArtistRef, CreateArtist, UpdateArtist};
use crate::models::show::SearchHit;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, phone, image_link, facebook_link, genres, \
                       website, seeking_venue, seeking_description";

/// Provides CRUD operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (name, city, state, phone, image_link, facebook_link, genres,
                                  website, seeking_venue, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.genres)
            .bind(&input.website)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await
    }

    /// Find an artist by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every artist (id and name only), ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<ArtistRef>, sqlx::Error> {
        sqlx::query_as::<_, ArtistRef>("SELECT id, name FROM artists ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on the artist name.
    ///
    /// `pattern` must already be an escaped `ILIKE` pattern.
    pub async fn search_by_name(
        pool: &PgPool,
        pattern: &str,
    ) -> Result<Vec<SearchHit>, sqlx::Error> {
        sqlx::query_as::<_, SearchHit>(
            "SELECT a.id, a.name,
                    (SELECT COUNT(*) FROM shows s
                     WHERE s.artist_id = a.id AND s.start_time > NOW()) AS num_upcoming_shows
             FROM artists a
             WHERE a.name ILIKE $1 ESCAPE '\\'
             ORDER BY a.id",
        )
        .bind(pattern)
        .fetch_all(pool)
        .await
    }

    /// Update an artist. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET
                name = COALESCE($2, name),
                city = COALESCE($3, city),
                state = COALESCE($4, state),
                phone = COALESCE($5, phone),
                image_link = COALESCE($6, image_link),
                facebook_link = COALESCE($7, facebook_link),
                genres = COALESCE($8, genres),
                website = COALESCE($9, website),
                seeking_venue = COALESCE($10, seeking_venue),
                seeking_description = COALESCE($11, seeking_description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.genres)
            .bind(&input.website)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an artist by ID; their shows go with them.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
