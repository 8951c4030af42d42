//! Route trees, one per service. Each binary mounts exactly one of them
//! next to the shared health check.

pub mod casting;
pub mod fyyur;
pub mod health;
pub mod trivia;
