//! Casting API permission names and the role presets configured at the
//! identity provider.
//!
//! Permission strings travel in the `permissions` claim of the bearer token
//! and must match these constants exactly.

pub const VIEW_MOVIE: &str = "view:movie";
pub const VIEW_ACTOR: &str = "view:actor";
pub const POST_MOVIE: &str = "post:movie";
pub const POST_ACTOR: &str = "post:actor";
pub const PATCH_MOVIE: &str = "patch:movie";
pub const PATCH_ACTOR: &str = "patch:actor";
pub const DELETE_MOVIE: &str = "delete:movie";
pub const DELETE_ACTOR: &str = "delete:actor";

/// Read-only access.
pub const CASTING_ASSISTANT: &[&str] = &[VIEW_MOVIE, VIEW_ACTOR];

/// Manages actors and edits movies; cannot create or delete movies.
pub const CASTING_DIRECTOR: &[&str] = &[
    VIEW_MOVIE,
    VIEW_ACTOR,
    POST_ACTOR,
    DELETE_ACTOR,
    PATCH_ACTOR,
    PATCH_MOVIE,
];

/// Every permission.
pub const EXECUTIVE_PRODUCER: &[&str] = &[
    VIEW_MOVIE,
    VIEW_ACTOR,
    POST_MOVIE,
    POST_ACTOR,
    PATCH_MOVIE,
    PATCH_ACTOR,
    DELETE_MOVIE,
    DELETE_ACTOR,
];

/// Whether `required` is among the granted permission strings.
///
/// Matching is exact: no trimming, no case folding, no wildcards.
pub fn is_granted<S: AsRef<str>>(granted: &[S], required: &str) -> bool {
    granted.iter().any(|p| p.as_ref() == required)
}
