//! Repository for the `venues` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::show::SearchHit;
use crate::models::venue::{CreateVenue, UpdateVenue, Venue, VenueListRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, \
                       genres, website, seeking_talent, seeking_description";

/// Correlated count of a venue's upcoming shows (venue aliased `v`).
const UPCOMING_COUNT: &str = "(SELECT COUNT(*) FROM shows s \
                              WHERE s.venue_id = v.id AND s.start_time > NOW())";

/// Provides CRUD operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues (name, city, state, address, phone, image_link, facebook_link,
                                 genres, website, seeking_talent, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.genres)
            .bind(&input.website)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await
    }

    /// Find a venue by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every venue with its location and upcoming show count, ordered
    /// by state, then city, then id so that areas come out contiguous.
    pub async fn list_with_upcoming(pool: &PgPool) -> Result<Vec<VenueListRow>, sqlx::Error> {
        let query = format!(
            "SELECT v.id, v.name, v.city, v.state, {UPCOMING_COUNT} AS num_upcoming_shows
             FROM venues v
             ORDER BY v.state, v.city, v.id"
        );
        sqlx::query_as::<_, VenueListRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on the venue name.
    ///
    /// `pattern` must already be an escaped `ILIKE` pattern, see
    /// [`marquee_core::search::contains_pattern`].
    pub async fn search_by_name(
        pool: &PgPool,
        pattern: &str,
    ) -> Result<Vec<SearchHit>, sqlx::Error> {
        let query = format!(
            "SELECT v.id, v.name, {UPCOMING_COUNT} AS num_upcoming_shows
             FROM venues v
             WHERE v.name ILIKE $1 ESCAPE '\\'
             ORDER BY v.id"
        );
        sqlx::query_as::<_, SearchHit>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Update a venue. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVenue,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET
                name = COALESCE($2, name),
                city = COALESCE($3, city),
                state = COALESCE($4, state),
                address = COALESCE($5, address),
                phone = COALESCE($6, phone),
                image_link = COALESCE($7, image_link),
                facebook_link = COALESCE($8, facebook_link),
                genres = COALESCE($9, genres),
                website = COALESCE($10, website),
                seeking_talent = COALESCE($11, seeking_talent),
                seeking_description = COALESCE($12, seeking_description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.genres)
            .bind(&input.website)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a venue by ID; its shows go with it (`ON DELETE CASCADE`).
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
