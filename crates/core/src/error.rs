use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A lookup that is not keyed by id came back empty (empty listing,
    /// search without matches, page past the end).
    #[error("No {0} found")]
    NothingFound(&'static str),

    /// Required fields missing or invalid. Maps to 422.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The request itself is malformed. Maps to 400.
    #[error("Bad request: {0}")]
    BadRequest(String),
}
