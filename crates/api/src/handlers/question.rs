//! Handlers for the trivia `/questions` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::pagination::Page;
use marquee_core::quiz::validate_difficulty;
use marquee_core::search::contains_pattern;
use marquee_core::types::DbId;
use marquee_core::validation;
use marquee_db::models::category::Category;
use marquee_db::models::question::{CreateQuestion, Question};
use marquee_db::repositories::{CategoryRepo, QuestionRepo};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::category::{category_map, CategoryMap};
use super::lenient_id;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::PageParams;
use crate::response::{ok, Success};
use crate::state::AppState;

/// Body of `POST /questions`: either a search or a new question.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionForm {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub category: Option<DbId>,
    pub difficulty: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionList {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: CategoryMap,
    pub current_category: Option<Category>,
}

#[derive(Debug, Serialize)]
pub struct SearchPage {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Option<Category>,
}

#[derive(Debug, Serialize)]
pub struct Created {
    pub created: DbId,
    pub question: Question,
    pub total_questions: i64,
}

#[derive(Debug, Serialize)]
pub struct DeletedQuestion {
    pub deleted: DbId,
    pub total_questions: i64,
}

/// GET /questions?page=N
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<Json<Success<QuestionList>>> {
    let page = Page::from_param(params.page)?;
    let questions = QuestionRepo::list_page(&state.pool, page).await?;
    if questions.is_empty() {
        return Err(AppError::Core(CoreError::NothingFound("questions")));
    }

    Ok(ok(QuestionList {
        questions,
        total_questions: QuestionRepo::count(&state.pool).await?,
        categories: category_map(&state.pool).await?,
        current_category: None,
    }))
}

/// DELETE /questions/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Success<DeletedQuestion>>> {
    if !QuestionRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }));
    }
    let total_questions = QuestionRepo::count(&state.pool).await?;
    tracing::info!(question_id = id, total_questions, "Question deleted");
    Ok(ok(DeletedQuestion {
        deleted: id,
        total_questions,
    }))
}

/// POST /questions
///
/// A non-empty `searchTerm` turns the request into a search; otherwise the
/// body is a new question.
pub async fn create_or_search(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
    AppJson(form): AppJson<QuestionForm>,
) -> AppResult<Response> {
    if let Some(term) = form.search_term.as_deref().filter(|t| !t.is_empty()) {
        let page = Page::from_param(params.page)?;
        let results = search_page(&state.pool, term, page).await?;
        return Ok(ok(results).into_response());
    }

    let input = CreateQuestion {
        question: validation::required_text("question", form.question)?,
        answer: validation::required_text("answer", form.answer)?,
        category: validation::required("category", form.category)?,
        difficulty: validate_difficulty(validation::required("difficulty", form.difficulty)?)?,
    };
    if CategoryRepo::find_by_id(&state.pool, input.category).await?.is_none() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "category {} does not exist",
            input.category
        ))));
    }

    let question = QuestionRepo::create(&state.pool, &input).await?;
    let total_questions = QuestionRepo::count(&state.pool).await?;
    tracing::info!(question_id = question.id, category = question.category, "Question added");

    let body = Created {
        created: question.id,
        question,
        total_questions,
    };
    Ok((StatusCode::CREATED, ok(body)).into_response())
}

/// POST /questions/search?page=N
pub async fn search(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
    AppJson(form): AppJson<SearchForm>,
) -> AppResult<Json<Success<SearchPage>>> {
    let term = form
        .search_term
        .ok_or_else(|| AppError::BadRequest("searchTerm is required".into()))?;
    let page = Page::from_param(params.page)?;
    Ok(ok(search_page(&state.pool, &term, page).await?))
}

/// Case-insensitive substring search on question text, paged like the list.
/// `total_questions` counts every match, not just this page.
async fn search_page(pool: &PgPool, term: &str, page: Page) -> AppResult<SearchPage> {
    let matches = QuestionRepo::search(pool, &contains_pattern(term)).await?;
    let questions = page.slice(&matches).to_vec();
    if questions.is_empty() {
        return Err(AppError::Core(CoreError::NothingFound("questions")));
    }
    Ok(SearchPage {
        questions,
        total_questions: matches.len() as i64,
        current_category: None,
    })
}
