//! HTTP layer for the Fyyur, Trivia and Casting services.
//!
//! Exposes the building blocks (config, state, error handling, auth, routes)
//! so the three binaries and the integration tests share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod server;
pub mod service;
pub mod state;
