//! HTTP-level Casting tests against a real database, driven with role-preset
//! tokens.

mod common;

use axum::http::{Method, StatusCode};
use common::{authed, body_json, build_test_app, token};
use marquee_api::service::Service;
use marquee_core::permissions::{CASTING_ASSISTANT, CASTING_DIRECTOR, EXECUTIVE_PRODUCER};
use sqlx::PgPool;

fn app(pool: &PgPool) -> axum::Router {
    build_test_app(pool.clone(), Service::Casting)
}

async fn create_movie(pool: &PgPool, title: &str) -> i64 {
    let response = authed(
        app(pool),
        Method::POST,
        "/movies",
        &token(EXECUTIVE_PRODUCER),
        Some(serde_json::json!({"title": title, "release_date": "2021-10-22"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["movie"]["id"].as_i64().unwrap()
}

async fn create_actor(pool: &PgPool, name: &str, movie_id: i64) -> i64 {
    let response = authed(
        app(pool),
        Method::POST,
        "/actors",
        &token(CASTING_DIRECTOR),
        Some(serde_json::json!({
            "name": name,
            "age": 30,
            "gender": "female",
            "movie_id": movie_id
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["actor"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_listings_are_404(pool: PgPool) {
    let assistant = token(CASTING_ASSISTANT);
    for uri in ["/movies", "/actors"] {
        let response = authed(app(&pool), Method::GET, uri, &assistant, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_movies_list_with_their_cast(pool: PgPool) {
    let dune = create_movie(&pool, "Dune").await;
    create_movie(&pool, "Tenet").await;
    create_actor(&pool, "Zendaya", dune).await;

    let response = authed(
        app(&pool),
        Method::GET,
        "/movies",
        &token(CASTING_ASSISTANT),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["movies"][0]["title"], "Dune");
    assert_eq!(json["movies"][0]["release_date"], "2021-10-22");
    assert_eq!(json["movies"][0]["actors"][0]["name"], "Zendaya");
    assert!(json["movies"][1]["actors"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_director_patches_movie_and_actor(pool: PgPool) {
    let movie = create_movie(&pool, "Working Title").await;
    let actor = create_actor(&pool, "Extra", movie).await;
    let director = token(CASTING_DIRECTOR);

    let response = authed(
        app(&pool),
        Method::PATCH,
        &format!("/movies/{movie}"),
        &director,
        Some(serde_json::json!({"title": "Final Title"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["movie"]["title"], "Final Title");
    assert_eq!(json["movie"]["release_date"], "2021-10-22");

    let response = authed(
        app(&pool),
        Method::PATCH,
        &format!("/actors/{actor}"),
        &director,
        Some(serde_json::json!({"age": 31})),
    )
    .await;
    assert_eq!(body_json(response).await["actor"]["age"], 31);

    let response = authed(
        app(&pool),
        Method::PATCH,
        "/actors/999999",
        &director,
        Some(serde_json::json!({"age": 31})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_actor_for_missing_movie_is_422(pool: PgPool) {
    let response = authed(
        app(&pool),
        Method::POST,
        "/actors",
        &token(CASTING_DIRECTOR),
        Some(serde_json::json!({
            "name": "Nobody",
            "age": 40,
            "gender": "male",
            "movie_id": 424242
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_producer_deletes_movie_and_its_cast(pool: PgPool) {
    let movie = create_movie(&pool, "Doomed").await;
    let actor = create_actor(&pool, "Doomed Actor", movie).await;
    let producer = token(EXECUTIVE_PRODUCER);

    let response = authed(
        app(&pool),
        Method::DELETE,
        &format!("/movies/{movie}"),
        &producer,
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["deleted"], movie);

    for uri in [format!("/movies/{movie}"), format!("/actors/{actor}")] {
        let response = authed(app(&pool), Method::GET, &uri, &producer, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patching_missing_actor_is_404_even_with_unknown_movie(pool: PgPool) {
    let response = authed(
        app(&pool),
        Method::PATCH,
        "/actors/9999",
        &token(CASTING_DIRECTOR),
        Some(serde_json::json!({"movie_id": 8888})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let dune = create_movie(&pool, "Dune").await;
    let zendaya = create_actor(&pool, "Zendaya", dune).await;
    let response = authed(
        app(&pool),
        Method::PATCH,
        &format!("/actors/{zendaya}"),
        &token(CASTING_DIRECTOR),
        Some(serde_json::json!({"movie_id": 8888})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patch_trims_text_like_create(pool: PgPool) {
    let dune = create_movie(&pool, "Dune").await;
    let zendaya = create_actor(&pool, "Zendaya", dune).await;
    let director = token(CASTING_DIRECTOR);

    let response = authed(
        app(&pool),
        Method::PATCH,
        &format!("/movies/{dune}"),
        &director,
        Some(serde_json::json!({"title": "  Dune: Part One "})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["movie"]["title"], "Dune: Part One");

    let response = authed(
        app(&pool),
        Method::PATCH,
        &format!("/actors/{zendaya}"),
        &director,
        Some(serde_json::json!({"name": " Zendaya Coleman ", "gender": " female"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["actor"]["name"], "Zendaya Coleman");
    assert_eq!(json["actor"]["gender"], "female");
}
