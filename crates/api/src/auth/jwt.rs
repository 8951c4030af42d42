//! Token verification against the identity provider's signing keys.
//!
//! Two key sources are supported. In production the provider publishes an
//! RS256 JSON Web Key Set, fetched once at startup; the token's `kid` header
//! selects the key. For local development and tests a shared HS256 secret can
//! be configured instead.

use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{
    decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use super::error::AuthError;
use crate::config::{optional_var, ConfigError};

/// Claim set carried by a Casting access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, as assigned by the identity provider.
    pub sub: String,
    /// Granted permission strings. Absent on tokens minted without RBAC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// String or array, depending on the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<serde_json::Value>,
}

impl Claims {
    /// Claims for `sub` holding `permissions`, valid for `ttl_secs` from now.
    pub fn new<S: AsRef<str>>(sub: &str, permissions: &[S], ttl_secs: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: sub.to_string(),
            permissions: Some(permissions.iter().map(|p| p.as_ref().to_string()).collect()),
            exp: now + ttl_secs,
            iat: Some(now),
            iss: None,
            aud: None,
        }
    }
}

/// Where verification keys come from.
#[derive(Debug, Clone)]
pub enum SigningKeys {
    /// Shared HS256 secret.
    Secret(String),
    /// RS256 public keys published by the identity provider.
    Jwks(JwkSet),
}

/// Everything needed to verify a bearer token.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub keys: SigningKeys,
    /// Required `iss` claim, when set.
    pub issuer: Option<String>,
    /// Required `aud` claim, when set.
    pub audience: Option<String>,
}

impl AuthConfig {
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            keys: SigningKeys::Secret(secret.into()),
            issuer: None,
            audience: None,
        }
    }

    /// Load signing keys from the environment.
    ///
    /// | Env Var          | Meaning                                         |
    /// |------------------|-------------------------------------------------|
    /// | `AUTH_JWKS_URL`  | key set URL; fetched now, takes precedence       |
    /// | `AUTH_SECRET`    | HS256 shared secret                              |
    /// | `AUTH_ISSUER`    | expected `iss` (optional)                        |
    /// | `AUTH_AUDIENCE`  | expected `aud` (optional)                        |
    ///
    /// Returns `Ok(None)` when neither key source is configured.
    pub async fn load() -> Result<Option<Self>, ConfigError> {
        let keys = if let Some(url) = optional_var("AUTH_JWKS_URL") {
            let set = fetch_key_set(&url).await?;
            tracing::info!(%url, keys = set.keys.len(), "Loaded identity provider key set");
            SigningKeys::Jwks(set)
        } else if let Some(secret) = optional_var("AUTH_SECRET") {
            SigningKeys::Secret(secret)
        } else {
            return Ok(None);
        };

        Ok(Some(Self {
            keys,
            issuer: optional_var("AUTH_ISSUER"),
            audience: optional_var("AUTH_AUDIENCE"),
        }))
    }

    /// Verify the signature, expiry, issuer and audience of `token` and
    /// return its claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::InvalidToken)?;

        let (key, algorithm) = match &self.keys {
            SigningKeys::Secret(secret) => {
                (DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256)
            }
            SigningKeys::Jwks(set) => {
                let kid = header.kid.as_deref().ok_or(AuthError::UnknownKey)?;
                let jwk = set.find(kid).ok_or(AuthError::UnknownKey)?;
                let key = DecodingKey::from_jwk(jwk).map_err(|_| AuthError::UnknownKey)?;
                (key, Algorithm::RS256)
            }
        };

        let data = decode::<Claims>(token, &key, &self.validation(algorithm))?;
        Ok(data.claims)
    }

    /// Issuer and audience checks only compare claims that are present, so a
    /// configured value also makes its claim mandatory.
    fn validation(&self, algorithm: Algorithm) -> Validation {
        let mut validation = Validation::new(algorithm);
        let mut required = vec!["exp"];
        if let Some(issuer) = &self.issuer {
            validation.set_issuer(&[issuer]);
            required.push("iss");
        }
        match &self.audience {
            Some(audience) => {
                validation.set_audience(&[audience]);
                required.push("aud");
            }
            None => validation.validate_aud = false,
        }
        validation.set_required_spec_claims(&required);
        validation
    }
}

async fn fetch_key_set(url: &str) -> Result<JwkSet, ConfigError> {
    let key_set_error = |e: reqwest::Error| ConfigError::KeySet {
        url: url.to_string(),
        reason: e.to_string(),
    };
    reqwest::get(url)
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(key_set_error)?
        .json::<JwkSet>()
        .await
        .map_err(key_set_error)
}

/// Require `permission` in the claim set.
pub fn check_permission(claims: &Claims, permission: &'static str) -> Result<(), AuthError> {
    let granted = claims
        .permissions
        .as_deref()
        .ok_or(AuthError::PermissionsMissing)?;
    if marquee_core::permissions::is_granted(granted, permission) {
        Ok(())
    } else {
        Err(AuthError::PermissionNotFound(permission))
    }
}

/// Sign `claims` with an HS256 shared secret.
///
/// Only useful against a server running in shared-secret mode: local
/// development and tests.
pub fn issue_token(secret: &str, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}
