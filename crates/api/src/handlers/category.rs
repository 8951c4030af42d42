//! Handlers for the trivia `/categories` resource.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::pagination::Page;
use marquee_core::types::DbId;
use marquee_db::models::category::Category;
use marquee_db::models::question::Question;
use marquee_db::repositories::{CategoryRepo, QuestionRepo};
use serde::Serialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery};
use crate::query::PageParams;
use crate::response::{ok, Success};
use crate::state::AppState;

/// `{id: type}` map, the shape the trivia front end renders.
pub type CategoryMap = BTreeMap<DbId, String>;

#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Category,
}

pub(crate) async fn category_map(pool: &PgPool) -> Result<CategoryMap, sqlx::Error> {
    let categories = CategoryRepo::list(pool).await?;
    Ok(categories.into_iter().map(|c| (c.id, c.kind)).collect())
}

/// GET /categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Success<CategoryList>>> {
    let categories = category_map(&state.pool).await?;
    if categories.is_empty() {
        return Err(AppError::Core(CoreError::NothingFound("categories")));
    }
    Ok(ok(CategoryList { categories }))
}

/// GET /categories/{id}/questions?page=N
pub async fn questions(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<Json<Success<CategoryQuestions>>> {
    let page = Page::from_param(params.page)?;
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    let questions = QuestionRepo::list_page_by_category(&state.pool, id, page).await?;
    if questions.is_empty() {
        return Err(AppError::Core(CoreError::NothingFound("questions")));
    }
    let total_questions = QuestionRepo::count_by_category(&state.pool, id).await?;

    Ok(ok(CategoryQuestions {
        questions,
        total_questions,
        current_category: category,
    }))
}
