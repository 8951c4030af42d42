//! Repository for the `shows` table and its venue/artist joins.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::show::{ArtistShow, CreateShow, Show, ShowListing, ShowTiming, VenueShow};

/// Provides create and read operations for shows.
///
/// Shows are removed only through the cascade from their venue or artist.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show, returning the created row.
    ///
    /// An unknown `venue_id` or `artist_id` fails with a foreign-key violation.
    pub async fn create(pool: &PgPool, input: &CreateShow) -> Result<Show, sqlx::Error> {
        sqlx::query_as::<_, Show>(
            "INSERT INTO shows (venue_id, artist_id, start_time)
             VALUES ($1, $2, $3)
             RETURNING id, venue_id, artist_id, start_time",
        )
        .bind(input.venue_id)
        .bind(input.artist_id)
        .bind(input.start_time)
        .fetch_one(pool)
        .await
    }

    /// List every show with venue and artist names, earliest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT s.id, s.venue_id, v.name AS venue_name,
                    s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                    s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             JOIN artists a ON a.id = s.artist_id
             ORDER BY s.start_time, s.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Shows played at a venue, past or upcoming.
    pub async fn list_for_venue(
        pool: &PgPool,
        venue_id: DbId,
        timing: ShowTiming,
    ) -> Result<Vec<VenueShow>, sqlx::Error> {
        let query = format!(
            "SELECT a.id AS artist_id, a.name AS artist_name,
                    a.image_link AS artist_image_link, s.start_time
             FROM shows s
             JOIN artists a ON a.id = s.artist_id
             WHERE s.venue_id = $1 AND {}
             ORDER BY s.start_time",
            timing.predicate()
        );
        sqlx::query_as::<_, VenueShow>(&query)
            .bind(venue_id)
            .fetch_all(pool)
            .await
    }

    /// Shows an artist played or will play, past or upcoming.
    pub async fn list_for_artist(
        pool: &PgPool,
        artist_id: DbId,
        timing: ShowTiming,
    ) -> Result<Vec<ArtistShow>, sqlx::Error> {
        let query = format!(
            "SELECT v.id AS venue_id, v.name AS venue_name,
                    v.image_link AS venue_image_link, s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             WHERE s.artist_id = $1 AND {}
             ORDER BY s.start_time",
            timing.predicate()
        );
        sqlx::query_as::<_, ArtistShow>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }
}
