use axum::Router;

use crate::routes;
use crate::state::AppState;

/// The three backends built from this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Fyyur,
    Trivia,
    Casting,
}

impl Service {
    pub fn name(self) -> &'static str {
        match self {
            Service::Fyyur => "fyyur",
            Service::Trivia => "trivia",
            Service::Casting => "casting",
        }
    }

    /// Port used when `PORT` is unset.
    pub fn default_port(self) -> u16 {
        match self {
            Service::Fyyur => 5000,
            Service::Trivia => 5001,
            Service::Casting => 8080,
        }
    }

    /// Whether routes check bearer-token permissions, so signing keys must be
    /// configured at startup.
    pub fn requires_auth(self) -> bool {
        matches!(self, Service::Casting)
    }

    /// The service's route tree, without the health check or middleware.
    pub fn routes(self) -> Router<AppState> {
        match self {
            Service::Fyyur => routes::fyyur::router(),
            Service::Trivia => routes::trivia::router(),
            Service::Casting => routes::casting::router(),
        }
    }
}
