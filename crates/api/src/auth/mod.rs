//! Bearer-token verification for the Casting service.
//!
//! Tokens are issued by an external identity provider. This module only
//! verifies them and checks the `permissions` claim; it never mints tokens
//! outside of tests and local development.

pub mod error;
pub mod jwt;
