//! Show entity model, DTOs and the joined read models used by the venue and
//! artist detail pages.

use marquee_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A show row from the `shows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub start_time: Timestamp,
}

/// DTO for booking a show.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShow {
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub start_time: Timestamp,
}

/// Whether a show lies ahead of or behind the database clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTiming {
    Past,
    Upcoming,
}

impl ShowTiming {
    /// SQL predicate on `shows.start_time` (aliased `s`).
    pub(crate) fn predicate(self) -> &'static str {
        match self {
            ShowTiming::Past => "s.start_time <= NOW()",
            ShowTiming::Upcoming => "s.start_time > NOW()",
        }
    }
}

/// A show in the global listing, with both sides' names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowListing {
    pub id: DbId,
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// A show as seen from a venue page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueShow {
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// A show as seen from an artist page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistShow {
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// A venue or artist search match with its upcoming show count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SearchHit {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}
