//! Trivia: questions, categories and the quiz.

use marquee_api::server::{self, ServerError};
use marquee_api::service::Service;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    server::run(Service::Trivia).await
}
