//! Permission-gated extractors for the Casting routes.
//!
//! Each route names its permission at the type level:
//!
//! ```ignore
//! async fn delete(
//!     RequirePermission(claims, ..): RequirePermission<DeleteMovies>,
//!     State(state): State<AppState>,
//!     Path(id): Path<DbId>,
//! ) -> AppResult<Json<Success<Deleted>>> { ... }
//! ```
//!
//! Extractors run before the handler body, so a request without the
//! permission is rejected whether or not the addressed row exists.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use marquee_core::permissions;

use super::auth::Authenticated;
use crate::auth::jwt::{check_permission, Claims};
use crate::error::AppError;
use crate::state::AppState;

/// A permission string a route can require.
pub trait Permission {
    const NAME: &'static str;
}

macro_rules! permission {
    ($($ty:ident => $name:path),* $(,)?) => {
        $(
            #[derive(Debug)]
            pub struct $ty;

            impl Permission for $ty {
                const NAME: &'static str = $name;
            }
        )*
    };
}

permission! {
    ViewMovies => permissions::VIEW_MOVIE,
    ViewActors => permissions::VIEW_ACTOR,
    PostMovies => permissions::POST_MOVIE,
    PostActors => permissions::POST_ACTOR,
    PatchMovies => permissions::PATCH_MOVIE,
    PatchActors => permissions::PATCH_ACTOR,
    DeleteMovies => permissions::DELETE_MOVIE,
    DeleteActors => permissions::DELETE_ACTOR,
}

/// Verified claims of a token that holds permission `P`.
pub struct RequirePermission<P: Permission>(pub Claims, pub PhantomData<P>);

impl<P: Permission> FromRequestParts<AppState> for RequirePermission<P> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Authenticated(claims) = Authenticated::from_request_parts(parts, state).await?;
        check_permission(&claims, P::NAME)?;
        tracing::debug!(sub = %claims.sub, permission = P::NAME, "Permission granted");
        Ok(RequirePermission(claims, PhantomData))
    }
}
