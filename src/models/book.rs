//! Book record model and request/query types.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Full book record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Unique identifier, assigned by the store, immutable after creation
    pub id: i32,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Publication year
    pub year: i32,
    /// Language of the book
    pub language: String,
    /// Page count (descriptive only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<i32>,
}

impl Book {
    /// Case-insensitive substring match of `query` against this record.
    ///
    /// The scan covers title, author and language, or only the named field
    /// when `scope` is given. `query` must already be lowercased.
    pub fn matches(&self, query: &str, scope: Option<SearchField>) -> bool {
        let field_contains = |value: &str| value.to_lowercase().contains(query);
        match scope {
            Some(SearchField::Title) => field_contains(&self.title),
            Some(SearchField::Author) => field_contains(&self.author),
            Some(SearchField::Language) => field_contains(&self.language),
            None => {
                field_contains(&self.title)
                    || field_contains(&self.author)
                    || field_contains(&self.language)
            }
        }
    }
}

/// Creation payload.
///
/// Fields are optional at the serde level so that a missing field surfaces
/// as a validation error naming it, not as a body rejection; the catalog
/// service enforces which ones are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub language: Option<String>,
    pub pages: Option<i32>,
}

/// Partial update payload: absent fields keep their prior value.
/// The record id is never part of the payload and cannot be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub language: Option<String>,
    pub pages: Option<i32>,
}

/// Field scope for search queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Author,
    Language,
}

/// Search query parameters (API)
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct SearchQuery {
    /// Free-text query, matched case-insensitively as a substring
    pub q: Option<String>,
    /// Restrict matching to a single field (title, author or language)
    pub field: Option<SearchField>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        Book {
            id: 2,
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            year: 1949,
            language: "English".to_string(),
            pages: Some(328),
        }
    }

    #[test]
    fn matches_any_field_case_insensitively() {
        let book = sample();
        assert!(book.matches("1984", None));
        assert!(book.matches("orwell", None));
        assert!(book.matches("english", None));
        assert!(!book.matches("tolstoy", None));
    }

    #[test]
    fn matches_respects_field_scope() {
        let book = sample();
        assert!(book.matches("orwell", Some(SearchField::Author)));
        assert!(!book.matches("orwell", Some(SearchField::Title)));
        assert!(book.matches("english", Some(SearchField::Language)));
    }
}
