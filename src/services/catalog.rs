//! Catalog service
//!
//! Validation rules for the book collection; storage itself lives in the
//! repository. Every error leaves the collection unchanged, since
//! validation happens before any write reaches the store.

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, SearchQuery, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books in insertion order
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Get a book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a book. Title, author, year and language are required;
    /// title and author must be non-empty.
    pub async fn create(&self, data: CreateBook) -> AppResult<Book> {
        let title = required("title", data.title)?;
        let author = required("author", data.author)?;
        let year = required("year", data.year)?;
        let language = required("language", data.language)?;

        if title.trim().is_empty() {
            return Err(AppError::Validation("Book title cannot be empty".to_string()));
        }
        if author.trim().is_empty() {
            return Err(AppError::Validation("Book author cannot be empty".to_string()));
        }

        self.repository
            .books
            .create(title, author, year, language, data.pages)
            .await
    }

    /// Apply a partial update. Supplied title/author values must be
    /// non-empty; absent fields keep their prior value.
    pub async fn update(&self, id: i32, data: UpdateBook) -> AppResult<Book> {
        if let Some(ref title) = data.title {
            if title.trim().is_empty() {
                return Err(AppError::Validation("Book title cannot be empty".to_string()));
            }
        }
        if let Some(ref author) = data.author {
            if author.trim().is_empty() {
                return Err(AppError::Validation("Book author cannot be empty".to_string()));
            }
        }

        self.repository.books.update(id, data).await
    }

    /// Delete a book by ID
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await
    }

    /// Search books by title, author or language.
    ///
    /// An absent or empty query means "no filter" and returns the full
    /// list; an empty result set is a normal outcome.
    pub async fn search(&self, query: &SearchQuery) -> AppResult<Vec<Book>> {
        match query.q.as_deref().map(str::trim) {
            None | Some("") => self.repository.books.list().await,
            Some(q) => {
                self.repository
                    .books
                    .search(&q.to_lowercase(), query.field)
                    .await
            }
        }
    }
}

fn required<T>(field: &str, value: Option<T>) -> AppResult<T> {
    value.ok_or_else(|| AppError::Validation(format!("Missing required field: {}", field)))
}
