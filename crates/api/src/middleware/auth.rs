//! Bearer-token extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::error::AuthError;
use crate::auth::jwt::Claims;
use crate::error::AppError;
use crate::state::AppState;

/// Verified claim set of the request's bearer token.
///
/// Rejects the request when the header is absent or malformed, or when the
/// token fails verification. Permission checks are layered on top by
/// [`RequirePermission`](super::permission::RequirePermission).
#[derive(Debug, Clone)]
pub struct Authenticated(pub Claims);

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::HeaderMissing)?
            .to_str()
            .map_err(|_| AuthError::InvalidHeader)?;

        let token = bearer_token(header)?;
        let auth = state.auth.as_deref().ok_or(AuthError::NotConfigured)?;
        let claims = auth.verify_token(token)?;

        Ok(Authenticated(claims))
    }
}

/// Split `Bearer <token>` into its token. The scheme is case-insensitive;
/// anything other than exactly two whitespace-separated parts is rejected.
pub fn bearer_token(header: &str) -> Result<&str, AuthError> {
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(AuthError::InvalidHeader),
    }
}
