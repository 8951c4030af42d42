//! Request handlers, one module per resource.
//!
//! Payload structs shared by several resources live here.

pub mod actor;
pub mod artist;
pub mod category;
pub mod movie;
pub mod question;
pub mod quiz;
pub mod show;
pub mod venue;

use marquee_core::types::DbId;
use marquee_db::models::show::SearchHit;
use serde::{Deserialize, Deserializer, Serialize};

/// Body of a successful delete.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: DbId,
}

/// Fyyur search form: `{"search_term": "..."}`. A missing term matches all.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// Fyyur search results.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
}

impl From<Vec<SearchHit>> for SearchResults {
    fn from(data: Vec<SearchHit>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Deserialize an optional id sent either as a JSON number or as a numeric
/// string. The trivia front end keys categories by object key, so ids often
/// arrive as strings.
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(DbId),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(id)) => Ok(Some(id)),
        Some(Raw::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
