//! Repository for the `questions` table.

use marquee_core::pagination::Page;
use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::question::{CreateQuestion, Question};

const COLUMNS: &str = "id, question, answer, category, difficulty";

/// Provides CRUD, paging and search for trivia questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question, returning the created row.
    ///
    /// An unknown category fails with a foreign-key violation and an out of
    /// range difficulty with a check violation.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.category)
            .bind(input.difficulty)
            .fetch_one(pool)
            .await
    }

    /// One page of all questions, ordered by id.
    pub async fn list_page(pool: &PgPool, page: Page) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Question>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// One page of a category's questions, ordered by id.
    pub async fn list_page_by_category(
        pool: &PgPool,
        category_id: DbId,
        page: Page,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE category = $1
             ORDER BY id LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await
    }

    pub async fn count_by_category(pool: &PgPool, category_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE category = $1")
            .bind(category_id)
            .fetch_one(pool)
            .await
    }

    /// Every question whose text matches an `ILIKE` pattern, ordered by id.
    ///
    /// `pattern` must already be escaped with
    /// [`contains_pattern`](marquee_core::search::contains_pattern).
    pub async fn search(pool: &PgPool, pattern: &str) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE question ILIKE $1 ESCAPE '\\'
             ORDER BY id"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Quiz candidates: all questions, or only those of one category.
    pub async fn list_for_quiz(
        pool: &PgPool,
        category_id: Option<DbId>,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE $1::BIGINT IS NULL OR category = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a question by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
