//! Handler for the trivia quiz: one random unseen question per call.

use axum::extract::State;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::quiz;
use marquee_core::types::DbId;
use marquee_db::models::question::Question;
use marquee_db::repositories::{CategoryRepo, QuestionRepo};
use serde::{Deserialize, Serialize};

use super::lenient_id;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::{ok, Success};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<DbId>>,
    pub quiz_category: Option<QuizCategory>,
}

/// `{id, type}` as sent by the front end; only `id` is used. `0` means all.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct QuizTurn {
    /// `null` once every question of the category has been played.
    pub question: Option<Question>,
}

/// POST /quizzes
pub async fn play(
    State(state): State<AppState>,
    AppJson(request): AppJson<QuizRequest>,
) -> AppResult<Json<Success<QuizTurn>>> {
    let (Some(previous), Some(category)) = (request.previous_questions, request.quiz_category)
    else {
        return Err(AppError::BadRequest(
            "previous_questions and quiz_category are required".into(),
        ));
    };
    let category_id = category
        .id
        .ok_or_else(|| AppError::BadRequest("quiz_category.id is required".into()))?;

    let filter = quiz::category_filter(category_id)?;
    if let Some(id) = filter {
        if CategoryRepo::find_by_id(&state.pool, id).await?.is_none() {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Category",
                id,
            }));
        }
    }

    let candidates = QuestionRepo::list_for_quiz(&state.pool, filter).await?;
    let question = quiz::pick_next(&candidates, &previous, |q| q.id, &mut rand::rng()).cloned();
    tracing::debug!(
        category_id,
        played = previous.len(),
        exhausted = question.is_none(),
        "Quiz turn"
    );

    Ok(ok(QuizTurn { question }))
}
