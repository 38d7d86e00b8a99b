//! Data models for Bookshelf

pub mod book;
pub mod customer;

// Re-export commonly used types
pub use book::{Book, CreateBook, SearchField, SearchQuery, UpdateBook};
pub use customer::{CreateCustomer, Customer, CustomerSearchQuery, UpdateCustomer};
