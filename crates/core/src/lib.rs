//! Domain rules shared by the Fyyur, Trivia and Casting services.
//!
//! Nothing in this crate performs I/O. The database and HTTP crates call into
//! these helpers so the rules can be unit-tested without a server.

pub mod areas;
pub mod error;
pub mod pagination;
pub mod permissions;
pub mod quiz;
pub mod search;
pub mod types;
pub mod validation;
