//! Requests rejected before any query runs: malformed bodies, bad paging and
//! missing fields. Uses a lazily-connected pool, so no database is needed.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{authed, body_json, build_test_app, get, lazy_pool, post_json, send, token};
use marquee_api::service::Service;
use marquee_core::permissions::EXECUTIVE_PRODUCER;

fn fyyur() -> axum::Router {
    build_test_app(lazy_pool(), Service::Fyyur)
}

fn trivia() -> axum::Router {
    build_test_app(lazy_pool(), Service::Trivia)
}

// ---------------------------------------------------------------------------
// Fyyur
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_json_is_a_400_envelope() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/venues")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = send(fyyur(), request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn venue_without_name_is_422() {
    let response = post_json(fyyur(), "/venues", serde_json::json!({"city": "Austin"})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn blank_artist_name_is_422() {
    let response = post_json(fyyur(), "/artists", serde_json::json!({"name": "   "})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn show_without_start_time_is_422() {
    let body = serde_json::json!({"venue_id": 1, "artist_id": 1});
    let response = post_json(fyyur(), "/shows", body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn trivia_routes_are_not_mounted_on_fyyur() {
    let response = get(fyyur(), "/questions").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_a_404_envelope() {
    let response = get(fyyur(), "/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 404);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn non_numeric_venue_id_is_a_400_envelope() {
    let response = get(fyyur(), "/venues/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Trivia
// ---------------------------------------------------------------------------

#[tokio::test]
async fn page_zero_is_400() {
    let response = get(trivia(), "/questions?page=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], 400);
}

#[tokio::test]
async fn non_numeric_page_is_a_400_envelope() {
    let response = get(trivia(), "/questions?page=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 400);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn non_numeric_category_id_is_a_400_envelope() {
    let response = get(trivia(), "/categories/abc/questions").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn quiz_without_fields_is_400() {
    let response = post_json(trivia(), "/quizzes", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = serde_json::json!({"previous_questions": []});
    let response = post_json(trivia(), "/quizzes", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn negative_quiz_category_is_400() {
    let body = serde_json::json!({"previous_questions": [], "quiz_category": {"id": -3}});
    let response = post_json(trivia(), "/quizzes", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn question_without_answer_is_422() {
    let body = serde_json::json!({"question": "Why?", "category": 1, "difficulty": 2});
    let response = post_json(trivia(), "/questions", body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn question_with_out_of_range_difficulty_is_422() {
    let body = serde_json::json!({
        "question": "Why?",
        "answer": "Because",
        "category": "1",
        "difficulty": 6
    });
    let response = post_json(trivia(), "/questions", body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn search_without_term_is_400() {
    let response = post_json(trivia(), "/questions/search", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Casting
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_numeric_movie_id_is_a_400_envelope() {
    let app = build_test_app(lazy_pool(), Service::Casting);
    let token = token(EXECUTIVE_PRODUCER);
    let response = authed(app, Method::GET, "/movies/abc", &token, None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Middleware
// ---------------------------------------------------------------------------

#[tokio::test]
async fn responses_carry_a_request_id() {
    let response = get(trivia(), "/questions?page=0").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn health_reports_degraded_without_database() {
    let response = get(fyyur(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}
