//! Repository layer: the in-memory stores

pub mod books;
pub mod customers;

/// Main repository struct holding the in-memory stores
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub customers: customers::CustomersRepository,
}

impl Repository {
    /// Create a new repository with empty stores
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
            customers: customers::CustomersRepository::new(),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
