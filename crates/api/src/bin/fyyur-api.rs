//! Fyyur: venues, artists and shows.

use marquee_api::server::{self, ServerError};
use marquee_api::service::Service;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    server::run(Service::Fyyur).await
}
