//! Fixed-size page windows for the trivia question listings.
//!
//! Pages are 1-based. The repository layer turns a [`Page`] into
//! `LIMIT`/`OFFSET`; handlers treat an empty page as "not found".

use crate::error::CoreError;

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// A validated 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(i64);

impl Page {
    pub const FIRST: Page = Page(1);

    /// Parse a user-supplied page number. Missing means the first page.
    pub fn from_param(page: Option<i64>) -> Result<Self, CoreError> {
        match page {
            None => Ok(Self::FIRST),
            Some(n) if n >= 1 => Ok(Page(n)),
            Some(n) => Err(CoreError::BadRequest(format!(
                "page must be 1 or greater, got {n}"
            ))),
        }
    }

    /// Maximum rows on a page.
    pub fn limit(self) -> i64 {
        QUESTIONS_PER_PAGE
    }

    /// Rows to skip before this page starts.
    pub fn offset(self) -> i64 {
        (self.0 - 1).saturating_mul(QUESTIONS_PER_PAGE)
    }

    /// Slice an already-loaded, already-ordered selection down to this page.
    pub fn slice<T>(self, items: &[T]) -> &[T] {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(QUESTIONS_PER_PAGE as usize).min(items.len());
        &items[start..end]
    }
}
