//! Books repository
//!
//! The canonical owner of the book collection. Records live in an ordered
//! `Vec` behind a single `RwLock`; insertion order is the order `list`
//! reports. Ids come from a monotonic counter, so a deleted id is never
//! handed out again even when that leaves gaps.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, SearchField, UpdateBook},
};

/// First id handed out by a store that has never held a record
const FIRST_ID: i32 = 1;

struct Store {
    books: Vec<Book>,
    next_id: i32,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            next_id: FIRST_ID,
        }
    }
}

#[derive(Clone)]
pub struct BooksRepository {
    store: Arc<RwLock<Store>>,
}

impl BooksRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::default())),
        }
    }

    /// Replace the store contents with the sample catalog.
    ///
    /// Fixture data carried over from the original service; seven well-known
    /// titles with ids 1 through 7.
    pub async fn seed_sample_catalog(&self) {
        let books = sample_catalog();
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let mut store = self.store.write().await;
        store.books = books;
        store.next_id = next_id;
    }

    /// List all books in insertion order
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let store = self.store.read().await;
        Ok(store.books.clone())
    }

    /// Get a book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        let store = self.store.read().await;
        store
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Append a new book, assigning the next available id
    pub async fn create(
        &self,
        title: String,
        author: String,
        year: i32,
        language: String,
        pages: Option<i32>,
    ) -> AppResult<Book> {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;

        let book = Book {
            id,
            title,
            author,
            year,
            language,
            pages,
        };
        store.books.push(book.clone());
        Ok(book)
    }

    /// Apply a partial update to a book. Absent fields keep their prior
    /// value; the id is never touched.
    pub async fn update(&self, id: i32, changes: UpdateBook) -> AppResult<Book> {
        let mut store = self.store.write().await;
        let book = store
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        if let Some(title) = changes.title {
            book.title = title;
        }
        if let Some(author) = changes.author {
            book.author = author;
        }
        if let Some(year) = changes.year {
            book.year = year;
        }
        if let Some(language) = changes.language {
            book.language = language;
        }
        if let Some(pages) = changes.pages {
            book.pages = Some(pages);
        }

        Ok(book.clone())
    }

    /// Remove a book by ID. The id is not reused afterwards.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut store = self.store.write().await;
        let position = store
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
        store.books.remove(position);
        Ok(())
    }

    /// Scan for books whose scoped fields contain `query` (already
    /// lowercased) as a substring. Results keep insertion order.
    pub async fn search(&self, query: &str, scope: Option<SearchField>) -> AppResult<Vec<Book>> {
        let store = self.store.read().await;
        Ok(store
            .books
            .iter()
            .filter(|b| b.matches(query, scope))
            .cloned()
            .collect())
    }
}

impl Default for BooksRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed sample catalog used to seed the store at startup
fn sample_catalog() -> Vec<Book> {
    let book = |id, title: &str, author: &str, year, language: &str, pages| Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        year,
        language: language.to_string(),
        pages: Some(pages),
    };

    vec![
        book(1, "To Kill a Mockingbird", "Harper Lee", 1960, "English", 281),
        book(2, "1984", "George Orwell", 1949, "English", 328),
        book(3, "Pride and Prejudice", "Jane Austen", 1813, "English", 432),
        book(4, "The Great Gatsby", "F. Scott Fitzgerald", 1925, "English", 180),
        book(
            5,
            "One Hundred Years of Solitude",
            "Gabriel García Márquez",
            1967,
            "Spanish",
            417,
        ),
        book(6, "The Catcher in the Rye", "J.D. Salinger", 1951, "English", 277),
        book(7, "Lord of the Flies", "William Golding", 1954, "English", 224),
    ]
}
