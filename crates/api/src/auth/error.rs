use axum::http::StatusCode;

/// Why a request failed the permission check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Authorization header is expected")]
    HeaderMissing,

    #[error("Authorization header must be of the form 'Bearer <token>'")]
    InvalidHeader,

    /// Bad signature, wrong algorithm or an unparseable token.
    #[error("Unable to parse authentication token")]
    InvalidToken,

    /// The `kid` header names no key in the provider's key set.
    #[error("Unable to find the appropriate key")]
    UnknownKey,

    #[error("Token expired")]
    TokenExpired,

    #[error("Incorrect claims. Please check the audience and issuer")]
    InvalidClaims,

    #[error("Permissions not included in token")]
    PermissionsMissing,

    #[error("Permission '{0}' not found")]
    PermissionNotFound(&'static str),

    /// A permission-gated route was hit on a server started without signing keys.
    #[error("Authentication is not configured")]
    NotConfigured,
}

impl AuthError {
    /// Machine-readable code carried in the error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::HeaderMissing => "AUTHORIZATION_HEADER_MISSING",
            AuthError::InvalidHeader | AuthError::InvalidToken | AuthError::UnknownKey => {
                "INVALID_HEADER"
            }
            AuthError::TokenExpired => "TOKEN_EXPIRED",
            AuthError::InvalidClaims | AuthError::PermissionsMissing => "INVALID_CLAIMS",
            AuthError::PermissionNotFound(_) => "PERMISSION_NOT_FOUND",
            AuthError::NotConfigured => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidIssuer
            | ErrorKind::InvalidAudience
            | ErrorKind::InvalidSubject
            | ErrorKind::ImmatureSignature
            | ErrorKind::MissingRequiredClaim(_) => AuthError::InvalidClaims,
            _ => AuthError::InvalidToken,
        }
    }
}
